//! Unit tests for error handling

use super::*;

#[cfg(test)]
mod eval_error_tests {
    use super::*;

    #[tokio::test]
    async fn test_http_error_conversion() {
        // Create a real HTTP error by making a request to an invalid URL
        let client = reqwest::Client::new();
        let result = client
            .get("http://invalid-url-that-does-not-exist.fake")
            .send()
            .await;
        let reqwest_error = result.unwrap_err();
        let eval_error = EvalError::from(reqwest_error);

        match eval_error {
            EvalError::Http(_) => (),
            _ => panic!("Expected Http error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let eval_error = EvalError::from(json_error);

        match eval_error {
            EvalError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u16>().unwrap_err();
        let eval_error = EvalError::from(parse_error);

        match eval_error {
            EvalError::InvalidSeason(_) => (),
            _ => panic!("Expected InvalidSeason error variant"),
        }
    }

    #[test]
    fn test_status_error_uses_operation_message() {
        let error = EvalError::Status {
            operation: Operation::FetchPlayerDetails,
            status: StatusCode::NOT_FOUND,
        };

        let error_string = error.to_string();
        assert!(error_string.starts_with("Failed to fetch player details"));
        assert!(error_string.contains("404"));
    }

    #[test]
    fn test_status_error_for_each_operation() {
        let cases = [
            (Operation::FetchPlayers, "Failed to fetch players"),
            (Operation::FilterPlayers, "Failed to fetch players"),
            (Operation::AnalyzeTrade, "Failed to analyze trade"),
            (Operation::FetchPlayerDetails, "Failed to fetch player details"),
        ];

        for (operation, message) in cases {
            let error = EvalError::Status {
                operation,
                status: StatusCode::INTERNAL_SERVER_ERROR,
            };
            assert!(error.to_string().starts_with(message));
        }
    }

    #[test]
    fn test_invalid_base_url_error() {
        let error = EvalError::InvalidBaseUrl {
            url: "mailto:ops@example.com".to_string(),
            message: "URL cannot be a base".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Invalid base URL"));
        assert!(error_string.contains("mailto:ops@example.com"));
    }

    #[test]
    fn test_invalid_sort_by_error() {
        let error = EvalError::InvalidSortBy {
            value: "age".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid sort key: age (expected `war` or `value`)"
        );
    }

    #[test]
    fn test_error_source_chain() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let eval_error = EvalError::from(json_error);

        let error_trait: &dyn std::error::Error = &eval_error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_status_error_has_no_source() {
        let error = EvalError::Status {
            operation: Operation::AnalyzeTrade,
            status: StatusCode::BAD_REQUEST,
        };
        let error_trait: &dyn std::error::Error = &error;
        assert!(error_trait.source().is_none());
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(EvalError::InvalidSortBy {
                value: "x".to_string(),
            })
        }

        match test_function().unwrap_err() {
            EvalError::InvalidSortBy { .. } => (),
            _ => panic!("Expected InvalidSortBy error"),
        }
    }
}
