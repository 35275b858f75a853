use fb_unwrap::*;
use std::fs;
use tempfile::{tempdir, TempDir};

#[cfg(test)]
mod tests {
    use super::*;

    struct TestUrls;
    impl TestUrls {
        const WRAPPED: &'static str = "https://l.example.com/?u=https%3A%2F%2Fexample.com%2Fpage%3Ffbclid%3Dabc123%26ref%3Dhome&fbclid=xyz789";
        const UNWRAPPED: &'static str = "https://example.com/page?ref=home";
        const FACEBOOK_WRAPPED: &'static str = "https://l.facebook.com/l.php?u=https%3A%2F%2Fwww.rust-lang.org%2Flearn%3Ffbclid%3DIwAR0abc%23get-started&h=AT0xyz&s=1";
        const FACEBOOK_UNWRAPPED: &'static str = "https://www.rust-lang.org/learn#get-started";
        const MISSING_TARGET: &'static str = "https://l.example.com/?fbclid=xyz789";
        const MALFORMED_OUTER: &'static str = "https://l.example.com/?u=https%3A%2F%2Fexample.com&broken";
        const MALFORMED_NESTED: &'static str =
            "https://l.example.com/?u=https%3A%2F%2Fexample.com%2Fpage%3Fref%3Dhome%26%26x%3D1";
        const RELATIVE_WRAPPED: &'static str =
            "/l.php?u=https%3A%2F%2Fexample.com%2Fpage%3Ffbclid%3Dabc123%26ref%3Dhome&h=AT0xyz";
        const RELATIVE_MISSING_TARGET: &'static str = "/l.php?h=AT0xyz";
        const CLEAN_TARGET: &'static str = "https://example.com/docs/index.html?lang=en&page=2#intro";
    }

    fn setup_temp_dir() -> TempDir {
        tempdir().unwrap()
    }

    fn wrap(target: &str) -> String {
        format!(
            "https://l.example.com/?u={}&fbclid=outer",
            urlencoding::encode(target)
        )
    }

    #[test]
    fn test_decrypt_url() {
        assert_eq!(decrypt_url(TestUrls::WRAPPED).unwrap(), TestUrls::UNWRAPPED);
        assert_eq!(
            decrypt_url(TestUrls::FACEBOOK_WRAPPED).unwrap(),
            TestUrls::FACEBOOK_UNWRAPPED
        );
    }

    #[test]
    fn test_decrypt_url_relative_wrapper() {
        assert_eq!(
            decrypt_url(TestUrls::RELATIVE_WRAPPED).unwrap(),
            TestUrls::UNWRAPPED
        );

        let err = decrypt_url(TestUrls::RELATIVE_MISSING_TARGET).unwrap_err();
        assert_eq!(err.url(), TestUrls::RELATIVE_MISSING_TARGET);
        assert_eq!(err.url_query(), "h=AT0xyz");
    }

    #[test]
    fn test_decrypt_url_blank_target() {
        let err = decrypt_url("https://l.example.com/?u=&fbclid=xyz").unwrap_err();
        assert_eq!(err.url_query(), "u=&fbclid=xyz");
        assert!(matches!(err.kind(), ParseErrorKind::MissingParameter { .. }));
    }

    #[test]
    fn test_decrypt_url_target_without_tracker() {
        let wrapped = wrap(TestUrls::CLEAN_TARGET);
        assert_eq!(decrypt_url(&wrapped).unwrap(), TestUrls::CLEAN_TARGET);
    }

    #[test]
    fn test_decrypt_url_preserves_other_parameters() {
        let wrapped = wrap("https://shop.example.com/item?id=42&fbclid=abc&color=dark+blue&size=m&size=l");
        let cleaned = decrypt_url(&wrapped).unwrap();

        let parts = UrlParts::split(&cleaned);
        let query = parse_query(&parts).unwrap();

        assert_eq!(parts.netloc(), Some("shop.example.com"));
        assert_eq!(parts.path(), "/item");
        assert!(!query.contains_key("fbclid"));
        assert_eq!(query.first("id"), Some("42"));
        assert_eq!(query.first("color"), Some("dark blue"));
        assert_eq!(query.get("size").unwrap(), ["m", "l"]);
    }

    #[test]
    fn test_decrypt_url_missing_target() {
        let err = decrypt_url(TestUrls::MISSING_TARGET).unwrap_err();

        assert_eq!(err.url(), TestUrls::MISSING_TARGET);
        assert_eq!(err.url_query(), "fbclid=xyz789");
        assert!(matches!(err.kind(), ParseErrorKind::MissingParameter { key } if key == "u"));
    }

    #[test]
    fn test_decrypt_url_malformed_outer_query() {
        let err = decrypt_url(TestUrls::MALFORMED_OUTER).unwrap_err();

        assert_eq!(err.url(), TestUrls::MALFORMED_OUTER);
        assert_eq!(err.url_query(), "u=https%3A%2F%2Fexample.com&broken");
    }

    #[test]
    fn test_decrypt_url_malformed_nested_query() {
        let err = decrypt_url(TestUrls::MALFORMED_NESTED).unwrap_err();

        assert_eq!(err.url(), "https://example.com/page?ref=home&&x=1");
        assert_eq!(err.url_query(), "ref=home&&x=1");
        assert!(matches!(err.kind(), ParseErrorKind::BadField { field } if field.is_empty()));
    }

    #[test]
    fn test_clean_url_idempotent() {
        let once = clean_url(&extract_url(TestUrls::WRAPPED).unwrap()).unwrap();
        assert_eq!(clean_url(&once).unwrap(), once);
        assert_eq!(
            clean_url(TestUrls::CLEAN_TARGET).unwrap(),
            TestUrls::CLEAN_TARGET
        );
    }

    #[test]
    fn test_concurrent_calls_are_independent() {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                std::thread::spawn(move || {
                    let target = format!("https://example.com/{}?n={}", i, i);
                    let wrapped = wrap(&format!("{}&fbclid=t{}", target, i));
                    (target, decrypt_url(&wrapped).unwrap())
                })
            })
            .collect();

        for handle in handles {
            let (expected, actual) = handle.join().unwrap();
            assert_eq!(actual, expected);
        }
    }

    #[test]
    fn test_batch_from_src_file() {
        let temp_dir = setup_temp_dir();
        let path = temp_dir.path().join("links.txt");
        fs::write(
            &path,
            format!("{}\n{}\n", TestUrls::WRAPPED, TestUrls::MISSING_TARGET),
        )
        .unwrap();

        let args = cli_args::CommandLineArgs {
            quiet: true,
            urls: vec![],
            src_files: vec![path.to_str().unwrap().to_string()],
        };
        let fetcher = url_fetcher::UrlFetcher::new(&args).unwrap();
        assert_eq!(fetcher.urls.len(), 2);

        let mode = program_mode::ProgramMode::from_quiet_flag(args.quiet);
        let mut out = Vec::new();
        let mut err = Vec::new();
        let stats = session::run_batch(&mode, &fetcher.urls, &mut out, &mut err).unwrap();

        assert_eq!(stats.successful, 1);
        assert_eq!(stats.failed, 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{}\n", TestUrls::UNWRAPPED)
        );
        assert_eq!(
            String::from_utf8(err).unwrap(),
            format!(
                "ERROR: Failed to parse URL '{}'\nERROR: Extracted query 'fbclid=xyz789'\n",
                TestUrls::MISSING_TARGET
            )
        );
    }
}
