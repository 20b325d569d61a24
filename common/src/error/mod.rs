use std::fmt;

/// Closed set of failures a product operation can end in.
///
/// The first four kinds originate on the server and are reported through the
/// response envelope; `Network` originates on the client when the request
/// never produced a response at all. Code that turns one of these into user
/// feedback matches on the kind exhaustively.
#[derive(Clone, Debug, PartialEq)]
pub enum ProductError {
    /// A required field is missing or violates an entity invariant.
    Validation(String),
    /// The identifier in the request path is not syntactically valid.
    InvalidId(String),
    /// The identifier is well-formed but matches no record.
    NotFound(String),
    /// The persistence layer or server infrastructure failed.
    Server(String),
    /// The request never reached the server (client-side transport failure).
    Network(String),
}

impl fmt::Display for ProductError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductError::Validation(detail)
            | ProductError::InvalidId(detail)
            | ProductError::NotFound(detail)
            | ProductError::Server(detail) => write!(f, "{}", detail),
            ProductError::Network(detail) => write!(f, "Network error: {}", detail),
        }
    }
}

impl std::error::Error for ProductError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn network_errors_carry_the_transport_detail() {
        let err = ProductError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn server_kinds_display_their_message_verbatim() {
        assert_eq!(
            ProductError::NotFound("Product not found".to_string()).to_string(),
            "Product not found"
        );
        assert_eq!(
            ProductError::InvalidId("Invalid product ID".to_string()).to_string(),
            "Invalid product ID"
        );
    }
}
