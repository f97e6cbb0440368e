use crate::curl::{CurlOpt, OptKind};
use crate::httpie::{CmdLine, Flag, Item, Opt};
use log::debug;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// A data argument that is neither a `key=value` field nor a delimited
    /// raw JSON document. Fatal: the body shape of the translated command
    /// cannot be determined.
    #[error("unknown data type")]
    UnknownDataType,
}

/// Expands HTTPie's localhost URL shorthand. A leading colon stands for
/// `localhost`, optionally followed by a port and a path.
pub fn expand_url(url: &str) -> String {
    if !url.starts_with(':') {
        return url.to_string();
    }
    if url == ":" {
        return "localhost/".to_string();
    }

    let rest = &url[1..];
    let port_len = rest.bytes().take_while(|b| b.is_ascii_digit()).count();
    if port_len == 0 {
        // No port. The colon only separates when what follows could be a
        // host fragment; a path keeps its own leading slash.
        if rest.starts_with('/') {
            format!("localhost{}", rest)
        } else {
            format!("localhost:{}", rest)
        }
    } else {
        format!("localhost:{}{}", &rest[..port_len], &rest[port_len..])
    }
}

pub fn method(cl: &mut CmdLine, o: &CurlOpt) {
    cl.add_opt(Opt::new("method", &o.arg));
}

pub fn auth(cl: &mut CmdLine, o: &CurlOpt) {
    cl.add_opt(Opt::new("user", &o.arg));
}

pub fn auth_type(cl: &mut CmdLine, o: &CurlOpt) {
    cl.add_opt(Opt::no_arg(&o.arg));
}

pub fn proxy(cl: &mut CmdLine, o: &CurlOpt) {
    cl.add_opt(Opt::new("proxy", &o.arg));
}

pub fn follow(cl: &mut CmdLine, _o: &CurlOpt) {
    cl.add_opt(Opt::no_arg("location"));
}

pub fn max_redirects(cl: &mut CmdLine, o: &CurlOpt) {
    cl.add_opt(Opt::new("max-redirects", &o.arg));
}

pub fn timeout(cl: &mut CmdLine, o: &CurlOpt) {
    cl.add_opt(Opt::new("max-time", &o.arg));
}

pub fn url(cl: &mut CmdLine, o: &CurlOpt) {
    cl.set_url(expand_url(&o.arg));
}

pub fn user_agent(cl: &mut CmdLine, o: &CurlOpt) {
    cl.add_item(Item::header("User-Agent", &o.arg));
}

pub fn verbose(cl: &mut CmdLine, _o: &CurlOpt) {
    cl.add_flag(Flag::new("verbose"));
}

pub fn referer(cl: &mut CmdLine, o: &CurlOpt) {
    cl.add_item(Item::header("Referer", &o.arg));
}

pub fn cookie(cl: &mut CmdLine, o: &CurlOpt) {
    cl.add_item(Item::header("Cookie", &o.arg));
}

pub fn noop(_cl: &mut CmdLine, _o: &CurlOpt) {}

/// Routes a data argument into either a form field or a raw JSON body.
///
/// `key=value` becomes a data-field item. Anything else must be a raw JSON
/// document wrapped in a one-character delimiter pair (shell quotes that
/// survived tokenization); the interior is validated as JSON and the
/// original argument is attached unchanged as the body reader.
pub fn data(cl: &mut CmdLine, o: &CurlOpt) -> Result<(), TransformError> {
    if let Some((name, value)) = o.arg.split_once('=') {
        cl.add_item(Item::data_field(name, value));
        cl.has_body = true;
        return Ok(());
    }

    if o.arg.chars().count() < 2 {
        return Err(TransformError::UnknownDataType);
    }
    let mut inner = o.arg.chars();
    inner.next();
    inner.next_back();
    if serde_json::from_str::<serde_json::Value>(inner.as_str()).is_err() {
        return Err(TransformError::UnknownDataType);
    }

    cl.set_directed_input(o.arg.clone());
    cl.has_body = true;
    Ok(())
}

/// Applies the transformer matching the option kind. The match is
/// exhaustive: a new `OptKind` variant will not compile without a
/// transformer arm.
pub fn apply(cl: &mut CmdLine, o: &CurlOpt) -> Result<(), TransformError> {
    debug!("transforming {:?} {:?}", o.kind, o.arg);
    match o.kind {
        OptKind::Method => method(cl, o),
        OptKind::Auth => auth(cl, o),
        OptKind::AuthType => auth_type(cl, o),
        OptKind::Proxy => proxy(cl, o),
        OptKind::Follow => follow(cl, o),
        OptKind::MaxRedirects => max_redirects(cl, o),
        OptKind::Timeout => timeout(cl, o),
        OptKind::Url => url(cl, o),
        OptKind::UserAgent => user_agent(cl, o),
        OptKind::Verbose => verbose(cl, o),
        OptKind::Referer => referer(cl, o),
        OptKind::Cookie => cookie(cl, o),
        OptKind::Data => data(cl, o)?,
        OptKind::Noop => noop(cl, o),
    }
    Ok(())
}

/// Folds an ordered option sequence into the model, stopping at the first
/// failure.
pub fn apply_all<'a, I>(cl: &mut CmdLine, opts: I) -> Result<(), TransformError>
where
    I: IntoIterator<Item = &'a CurlOpt>,
{
    for o in opts {
        apply(cl, o)?;
    }
    Ok(())
}
