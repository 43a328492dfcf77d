use actix_cors::Cors;

/// Cross-origin policy for the profile API: one allowed origin, the three
/// verbs the routes use, any request header.
pub fn cors(allowed_origin: &str) -> Cors {
    Cors::default()
        .allowed_origin(allowed_origin)
        .allowed_methods(vec!["GET", "PUT", "PATCH"])
        .allow_any_header()
        .max_age(1800)
}
