//! Line templates for the text transports. `{timestamp} {tag} {scope}  {msg}` is parsed once
//! at construction time so rendering a record is a single pass over segments.

/// Tokens a template may reference. Unknown `{names}` are kept as literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Timestamp,
    Tag,
    Level,
    Scope,
    Msg,
    App,
}

impl Placeholder {
    pub const ALL: &'static [Self] = &[
        Self::Timestamp,
        Self::Tag,
        Self::Level,
        Self::Scope,
        Self::Msg,
        Self::App,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Timestamp => "timestamp",
            Self::Tag => "tag",
            Self::Level => "level",
            Self::Scope => "scope",
            Self::Msg => "msg",
            Self::App => "app",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|ph| ph.as_str() == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    Placeholder(Placeholder),
}

/// A parsed line template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    #[must_use]
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open..].find('}').map(|i| open + i) else {
                break;
            };
            literal.push_str(&rest[..open]);
            let name = &rest[open + 1..close];

            if let Some(ph) = Placeholder::from_name(name) {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Placeholder(ph));
            } else {
                literal.push_str(&rest[open..=close]);
            }
            rest = &rest[close + 1..];
        }

        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self { segments }
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Substitutes `values` into the template.
    #[must_use]
    pub fn render(&self, values: &Values<'_>) -> String {
        let mut line = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => line.push_str(text),
                Segment::Placeholder(ph) => line.push_str(values.get(*ph)),
            }
        }
        line
    }
}

/// Borrowed substitution values for one rendered line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Values<'a> {
    pub timestamp: &'a str,
    pub tag: &'a str,
    pub level: &'a str,
    pub scope: &'a str,
    pub msg: &'a str,
    pub app: &'a str,
}

impl Values<'_> {
    const fn get(&self, ph: Placeholder) -> &str {
        match ph {
            Placeholder::Timestamp => self.timestamp,
            Placeholder::Tag => self.tag,
            Placeholder::Level => self.level,
            Placeholder::Scope => self.scope,
            Placeholder::Msg => self.msg,
            Placeholder::App => self.app,
        }
    }
}
