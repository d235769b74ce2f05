//! Line templates such as `{timestamp} :: {level:<8} :: {caller:<17} - {msg}`.
//!
//! A field may carry a width and alignment after a colon: `<` pads on the
//! right, `>` on the left. A bare number means left-aligned.

/// Closed set of known substitution tokens; unknown `{names}` pass through as literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Timestamp,
    Level,
    Caller,
    Msg,
    Target,
    Rank,
}

impl Placeholder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Timestamp => "timestamp",
            Self::Level => "level",
            Self::Caller => "caller",
            Self::Msg => "msg",
            Self::Target => "target",
            Self::Rank => "rank",
        }
    }

    pub const ALL: &'static [Self] = &[
        Self::Timestamp,
        Self::Level,
        Self::Caller,
        Self::Msg,
        Self::Target,
        Self::Rank,
    ];

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|ph| ph.as_str() == name)
    }
}

/// How a padded field sits inside its width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Right,
}

/// Minimum width and alignment for one placeholder occurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Width {
    pub min: usize,
    pub alignment: Alignment,
}

impl Width {
    fn parse(spec: &str) -> Option<Self> {
        let (alignment, digits) = match spec.chars().next()? {
            '<' => (Alignment::Left, &spec[1..]),
            '>' => (Alignment::Right, &spec[1..]),
            _ => (Alignment::Left, spec),
        };
        // u16 caps the padding a hostile template can request.
        let min: u16 = digits.parse().ok()?;
        Some(Self {
            min: usize::from(min),
            alignment,
        })
    }

    /// Pads by character count so multi-byte names line up.
    #[must_use]
    pub fn pad(&self, s: &str) -> String {
        let len = s.chars().count();
        if len >= self.min {
            return s.to_string();
        }

        let padding = self.min - len;
        match self.alignment {
            Alignment::Left => format!("{}{}", s, " ".repeat(padding)),
            Alignment::Right => format!("{}{}", " ".repeat(padding), s),
        }
    }
}

/// Parsing into segments once avoids re-scanning the template on every log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSegment {
    /// Separators and unknown `{names}` pass through untouched.
    Literal(String),
    /// Known tokens, substituted and padded at render time.
    Field(Placeholder, Width),
}

/// Pre-parsed template: parse once, render many.
#[derive(Debug, Clone)]
pub struct FormatTemplate {
    source: String,
    segments: Vec<FormatSegment>,
}

impl FormatTemplate {
    #[must_use]
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut i = 0;
        let chars: Vec<char> = template.chars().collect();

        while i < chars.len() {
            if chars[i] == '{'
                && let Some(end) = chars[i..].iter().position(|&c| c == '}')
            {
                let end = i + end;
                let inner: String = chars[i + 1..end].iter().collect();

                if let Some((ph, width)) = Self::match_field(&inner) {
                    if !current.is_empty() {
                        segments.push(FormatSegment::Literal(std::mem::take(&mut current)));
                    }
                    segments.push(FormatSegment::Field(ph, width));
                } else {
                    current.push_str(&format!("{{{inner}}}"));
                }

                i = end + 1;
                continue;
            }

            current.push(chars[i]);
            i += 1;
        }

        if !current.is_empty() {
            segments.push(FormatSegment::Literal(current));
        }

        Self {
            source: template.to_string(),
            segments,
        }
    }

    fn match_field(inner: &str) -> Option<(Placeholder, Width)> {
        let (name, spec) = inner.split_once(':').map_or((inner, None), |(n, s)| (n, Some(s)));
        let ph = Placeholder::from_name(name)?;
        let width = match spec {
            Some(spec) => Width::parse(spec)?,
            None => Width::default(),
        };
        Some((ph, width))
    }

    /// The string this template was parsed from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn segments(&self) -> &[FormatSegment] {
        &self.segments
    }

    /// True if the template renders `placeholder` somewhere.
    #[must_use]
    pub fn contains(&self, placeholder: Placeholder) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, FormatSegment::Field(ph, _) if *ph == placeholder))
    }

    /// Substitutes and pads every field.
    #[must_use]
    pub fn render(&self, values: &FormatValues) -> String {
        self.render_with(values, |_, padded| padded)
    }

    /// Like [`render`](Self::render), but hands each padded field to `decorate`
    /// first. Styling after padding keeps column widths free of escape codes.
    pub fn render_with<F>(&self, values: &FormatValues, mut decorate: F) -> String
    where
        F: FnMut(Placeholder, String) -> String,
    {
        let mut result = String::new();

        for segment in &self.segments {
            match segment {
                FormatSegment::Literal(s) => result.push_str(s),
                FormatSegment::Field(ph, width) => {
                    let padded = width.pad(values.get(*ph));
                    result.push_str(&decorate(*ph, padded));
                }
            }
        }

        result
    }
}

impl Default for FormatTemplate {
    fn default() -> Self {
        Self::parse(super::DEFAULT_FORMAT)
    }
}

/// Typed value bag: every placeholder has a field, so no key typos at runtime.
#[derive(Debug, Clone, Default)]
pub struct FormatValues {
    pub timestamp: String,
    pub level: String,
    pub caller: String,
    pub msg: String,
    pub target: String,
    pub rank: String,
}

impl FormatValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }

    #[must_use]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    #[must_use]
    pub fn caller(mut self, caller: impl Into<String>) -> Self {
        self.caller = caller.into();
        self
    }

    #[must_use]
    pub fn msg(mut self, msg: impl Into<String>) -> Self {
        self.msg = msg.into();
        self
    }

    #[must_use]
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    #[must_use]
    pub fn rank(mut self, rank: impl Into<String>) -> Self {
        self.rank = rank.into();
        self
    }

    fn get(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::Timestamp => &self.timestamp,
            Placeholder::Level => &self.level,
            Placeholder::Caller => &self.caller,
            Placeholder::Msg => &self.msg,
            Placeholder::Target => &self.target,
            Placeholder::Rank => &self.rank,
        }
    }
}
