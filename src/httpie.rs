use crate::config::FlagStyle;
use itertools::Itertools;
use std::io::Cursor;

/// One request item in HTTPie's item syntax: a header, a query-string
/// field, or a body data field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Header { name: String, value: String },
    QueryField { name: String, value: String },
    DataField { name: String, value: String },
}

impl Item {
    pub fn header(name: &str, value: &str) -> Self {
        Item::Header {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    pub fn query_field(name: &str, value: &str) -> Self {
        Item::QueryField {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    pub fn data_field(name: &str, value: &str) -> Self {
        Item::DataField {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    /// Renders the item in HTTPie's request-item separator syntax.
    pub fn render(&self) -> String {
        match self {
            Item::Header { name, value } => format!("{}:{}", name, value),
            Item::QueryField { name, value } => format!("{}=={}", name, value),
            Item::DataField { name, value } => format!("{}={}", name, value),
        }
    }
}

/// A boolean switch with no value, e.g. verbose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flag {
    pub name: String,
}

impl Flag {
    pub fn new(name: &str) -> Self {
        Flag {
            name: name.to_string(),
        }
    }
}

/// A typed parameter, optionally carrying a value (method, proxy, timeout...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opt {
    pub name: String,
    pub arg: Option<String>,
}

impl Opt {
    pub fn new(name: &str, arg: &str) -> Self {
        Opt {
            name: name.to_string(),
            arg: Some(arg.to_string()),
        }
    }

    pub fn no_arg(name: &str) -> Self {
        Opt {
            name: name.to_string(),
            arg: None,
        }
    }
}

/// The accumulating HTTPie invocation being built by the transformation
/// pass. Items, flags and options keep insertion order; the renderer relies
/// on it.
#[derive(Debug, Default)]
pub struct CmdLine {
    pub items: Vec<Item>,
    pub flags: Vec<Flag>,
    pub options: Vec<Opt>,
    pub has_body: bool,
    pub url: String,
    pub directed_input: Option<Cursor<String>>,
}

impl CmdLine {
    pub fn new() -> Self {
        CmdLine::default()
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn add_flag(&mut self, flag: Flag) {
        self.flags.push(flag);
    }

    pub fn add_opt(&mut self, opt: Opt) {
        self.options.push(opt);
    }

    pub fn set_url(&mut self, url: String) {
        self.url = url;
    }

    /// Attaches a raw request body as an in-memory reader. The last body
    /// set wins.
    pub fn set_directed_input(&mut self, body: String) {
        self.directed_input = Some(Cursor::new(body));
    }

    /// Serializes the model into a runnable `http ...` command string.
    pub fn render(&self, style: FlagStyle) -> String {
        let short = style == FlagStyle::Short;
        let mut tokens: Vec<String> = vec!["http".to_string()];

        for flag in &self.flags {
            tokens.push(flag_token(&flag.name, short));
        }

        // curl's -d sends form-encoded fields; HTTPie defaults to JSON, so
        // field-based bodies need --form. A raw body is piped as-is.
        if self.has_body && self.directed_input.is_none() {
            tokens.push(if short { "-f" } else { "--form" }.to_string());
        }

        // The method renders as HTTPie's positional verb, not as an option.
        let mut method = None;
        for opt in &self.options {
            if opt.name == "method" {
                method = opt.arg.clone();
                continue;
            }
            tokens.extend(opt_tokens(opt, short));
        }

        if let Some(m) = method {
            tokens.push(m.to_uppercase());
        }
        if !self.url.is_empty() {
            tokens.push(quote(&self.url));
        }
        for item in &self.items {
            tokens.push(quote(&item.render()));
        }

        let cmd = tokens.iter().join(" ");
        match &self.directed_input {
            Some(body) => format!("printf '%s' {} | {}", quote(body.get_ref()), cmd),
            None => cmd,
        }
    }
}

fn flag_token(name: &str, short: bool) -> String {
    if short {
        if let Some(s) = short_flag(name) {
            return s.to_string();
        }
    }
    format!("--{}", name)
}

fn short_flag(name: &str) -> Option<&'static str> {
    match name {
        "verbose" => Some("-v"),
        _ => None,
    }
}

/// Maps a model option onto its HTTPie spelling. Option names follow curl's
/// vocabulary (user, location, max-time); HTTPie spells them differently.
fn opt_tokens(opt: &Opt, short: bool) -> Vec<String> {
    let mut out = Vec::new();
    match opt.name.as_str() {
        "user" => out.push(if short { "-a" } else { "--auth" }.to_string()),
        "proxy" => out.push("--proxy".to_string()),
        "location" => out.push(if short { "-F" } else { "--follow" }.to_string()),
        "max-redirects" => out.push("--max-redirects".to_string()),
        "max-time" => out.push("--timeout".to_string()),
        "basic" | "digest" | "ntlm" | "negotiate" => {
            out.push(if short { "-A" } else { "--auth-type" }.to_string());
            out.push(opt.name.clone());
            return out;
        }
        name => out.push(format!("--{}", name)),
    }
    if let Some(arg) = &opt.arg {
        out.push(quote(arg));
    }
    out
}

/// Single-quotes a token unless it only contains shell-safe characters.
fn quote(s: &str) -> String {
    let safe = !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=@%+,".contains(c));
    if safe {
        s.to_string()
    } else {
        format!("'{}'", s.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_render_with_httpie_separators() {
        assert_eq!(Item::header("Cookie", "a=b").render(), "Cookie:a=b");
        assert_eq!(Item::query_field("page", "2").render(), "page==2");
        assert_eq!(Item::data_field("name", "joe").render(), "name=joe");
    }

    #[test]
    fn render_keeps_insertion_order() {
        let mut cl = CmdLine::new();
        cl.add_flag(Flag::new("verbose"));
        cl.add_opt(Opt::new("method", "post"));
        cl.add_opt(Opt::no_arg("location"));
        cl.set_url("localhost:8080/x".to_string());
        cl.add_item(Item::header("User-Agent", "curlpie"));
        cl.add_item(Item::header("Referer", "http://a/b"));

        assert_eq!(
            cl.render(FlagStyle::Long),
            "http --verbose --follow POST localhost:8080/x User-Agent:curlpie Referer:http://a/b"
        );
    }

    #[test]
    fn render_short_style() {
        let mut cl = CmdLine::new();
        cl.add_flag(Flag::new("verbose"));
        cl.add_opt(Opt::new("user", "joe:secret"));
        cl.set_url("example.com".to_string());

        assert_eq!(
            cl.render(FlagStyle::Short),
            "http -v -a joe:secret example.com"
        );
    }

    #[test]
    fn field_body_renders_as_form() {
        let mut cl = CmdLine::new();
        cl.set_url("example.com".to_string());
        cl.add_item(Item::data_field("name", "joe"));
        cl.has_body = true;

        assert_eq!(cl.render(FlagStyle::Long), "http --form example.com name=joe");
    }

    #[test]
    fn raw_body_renders_as_pipeline() {
        let mut cl = CmdLine::new();
        cl.set_url("example.com".to_string());
        cl.set_directed_input(r#""{"a":1}""#.to_string());
        cl.has_body = true;

        assert_eq!(
            cl.render(FlagStyle::Long),
            r#"printf '%s' '"{"a":1}"' | http example.com"#
        );
    }

    #[test]
    fn unsafe_tokens_are_quoted() {
        let mut cl = CmdLine::new();
        cl.set_url("example.com".to_string());
        cl.add_item(Item::header("User-Agent", "a browser"));

        assert_eq!(
            cl.render(FlagStyle::Long),
            "http example.com 'User-Agent:a browser'"
        );
    }

    #[test]
    fn auth_type_renders_by_name() {
        let mut cl = CmdLine::new();
        cl.add_opt(Opt::no_arg("digest"));
        cl.set_url("example.com".to_string());

        assert_eq!(cl.render(FlagStyle::Long), "http --auth-type digest example.com");
        assert_eq!(cl.render(FlagStyle::Short), "http -A digest example.com");
    }
}
