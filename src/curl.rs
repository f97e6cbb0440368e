use log::debug;

/// The closed set of recognized curl option kinds. The transformer dispatch
/// matches exhaustively over this enum, so adding a kind without a
/// transformer fails to compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptKind {
    Method,
    Auth,
    AuthType,
    Proxy,
    Follow,
    MaxRedirects,
    Timeout,
    Url,
    UserAgent,
    Verbose,
    Referer,
    Cookie,
    Data,
    Noop,
}

/// One recognized unit of curl input: the option kind plus its raw string
/// argument (empty for valueless flags). Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurlOpt {
    pub kind: OptKind,
    pub arg: String,
}

impl CurlOpt {
    pub fn new(kind: OptKind, arg: &str) -> Self {
        CurlOpt {
            kind,
            arg: arg.to_string(),
        }
    }
}

/// Tokenizer output: the ordered recognized options, plus any tokens the
/// tokenizer could not place (reported by the caller, never transformed).
#[derive(Debug, Default)]
pub struct ParsedArgs {
    pub opts: Vec<CurlOpt>,
    pub unrecognized: Vec<String>,
}

/// Turns raw curl argv tokens into an ordered option sequence. A leading
/// `curl` token is skipped so whole command lines can be pasted verbatim.
pub fn parse_args(tokens: &[String]) -> ParsedArgs {
    let mut parsed = ParsedArgs::default();
    let mut iter = tokens.iter().peekable();

    if iter.peek().map(|t| t.as_str()) == Some("curl") {
        iter.next();
    }

    while let Some(token) = iter.next() {
        let kind = match token.as_str() {
            "-X" | "--request" => OptKind::Method,
            "-u" | "--user" => OptKind::Auth,
            "--basic" | "--digest" | "--ntlm" | "--negotiate" => {
                let name = token.trim_start_matches('-');
                parsed.opts.push(CurlOpt::new(OptKind::AuthType, name));
                continue;
            }
            "-x" | "--proxy" => OptKind::Proxy,
            "-L" | "--location" => {
                parsed.opts.push(CurlOpt::new(OptKind::Follow, ""));
                continue;
            }
            "--max-redirs" => OptKind::MaxRedirects,
            "-m" | "--max-time" => OptKind::Timeout,
            "-A" | "--user-agent" => OptKind::UserAgent,
            "-v" | "--verbose" => {
                parsed.opts.push(CurlOpt::new(OptKind::Verbose, ""));
                continue;
            }
            "-e" | "--referer" => OptKind::Referer,
            "-b" | "--cookie" => OptKind::Cookie,
            "-d" | "--data" | "--data-ascii" | "--data-raw" => OptKind::Data,
            "-s" | "--silent" | "-k" | "--insecure" | "--compressed" => {
                parsed.opts.push(CurlOpt::new(OptKind::Noop, ""));
                continue;
            }
            flag if flag.starts_with('-') => {
                debug!("unrecognized token: {}", flag);
                parsed.unrecognized.push(flag.to_string());
                continue;
            }
            url => {
                parsed.opts.push(CurlOpt::new(OptKind::Url, url));
                continue;
            }
        };

        // Value-taking option: consume the next token as its argument.
        match iter.next() {
            Some(arg) => parsed.opts.push(CurlOpt::new(kind, arg)),
            None => parsed.unrecognized.push(token.to_string()),
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parses_a_full_command_line_in_order() {
        let parsed = parse_args(&tokens(&[
            "curl", "-v", "-X", "POST", "-d", "name=joe", "http://example.com",
        ]));

        assert!(parsed.unrecognized.is_empty());
        assert_eq!(
            parsed.opts,
            vec![
                CurlOpt::new(OptKind::Verbose, ""),
                CurlOpt::new(OptKind::Method, "POST"),
                CurlOpt::new(OptKind::Data, "name=joe"),
                CurlOpt::new(OptKind::Url, "http://example.com"),
            ]
        );
    }

    #[test]
    fn auth_type_flags_carry_their_name() {
        let parsed = parse_args(&tokens(&["--digest", "-u", "joe:secret"]));
        assert_eq!(
            parsed.opts,
            vec![
                CurlOpt::new(OptKind::AuthType, "digest"),
                CurlOpt::new(OptKind::Auth, "joe:secret"),
            ]
        );
    }

    #[test]
    fn unrecognized_flags_are_collected_not_dropped_silently() {
        let parsed = parse_args(&tokens(&["--ipv6", ":8080"]));
        assert_eq!(parsed.unrecognized, vec!["--ipv6".to_string()]);
        assert_eq!(parsed.opts, vec![CurlOpt::new(OptKind::Url, ":8080")]);
    }

    #[test]
    fn ignored_flags_become_noops() {
        let parsed = parse_args(&tokens(&["-s", "example.com"]));
        assert_eq!(
            parsed.opts,
            vec![
                CurlOpt::new(OptKind::Noop, ""),
                CurlOpt::new(OptKind::Url, "example.com"),
            ]
        );
    }

    #[test]
    fn value_option_at_end_of_line_is_unrecognized() {
        let parsed = parse_args(&tokens(&["example.com", "-X"]));
        assert_eq!(parsed.opts, vec![CurlOpt::new(OptKind::Url, "example.com")]);
        assert_eq!(parsed.unrecognized, vec!["-X".to_string()]);
    }
}
