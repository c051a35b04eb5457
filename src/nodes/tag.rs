//! Semantic type labels attached to nodes
//!
//! Tags are opaque to the representer: converters pick them, the emitter and tag resolution
//! interpret them. The core-schema tags are provided as constants.

use std::borrow::Cow;
use std::fmt;

const CORE_PREFIX: &str = "tag:yaml.org,2002:";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(Cow<'static, str>);

impl Tag {
    pub const NULL: Tag = Tag(Cow::Borrowed("tag:yaml.org,2002:null"));
    pub const BOOL: Tag = Tag(Cow::Borrowed("tag:yaml.org,2002:bool"));
    pub const INT: Tag = Tag(Cow::Borrowed("tag:yaml.org,2002:int"));
    pub const FLOAT: Tag = Tag(Cow::Borrowed("tag:yaml.org,2002:float"));
    pub const STR: Tag = Tag(Cow::Borrowed("tag:yaml.org,2002:str"));
    pub const BINARY: Tag = Tag(Cow::Borrowed("tag:yaml.org,2002:binary"));
    pub const SEQ: Tag = Tag(Cow::Borrowed("tag:yaml.org,2002:seq"));
    pub const MAP: Tag = Tag(Cow::Borrowed("tag:yaml.org,2002:map"));
    pub const SET: Tag = Tag(Cow::Borrowed("tag:yaml.org,2002:set"));

    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Tag(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for tags in the `tag:yaml.org,2002:` namespace
    pub fn is_core(&self) -> bool {
        self.0.starts_with(CORE_PREFIX)
    }

    /// Shorthand form: `!!str` for core tags, the tag itself otherwise
    pub fn short(&self) -> Cow<'_, str> {
        match self.0.strip_prefix(CORE_PREFIX) {
            Some(suffix) => Cow::Owned(format!("!!{}", suffix)),
            None => Cow::Borrowed(&self.0),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Tag {
    fn from(tag: &'static str) -> Self {
        Tag::new(tag)
    }
}

impl From<String> for Tag {
    fn from(tag: String) -> Self {
        Tag::new(tag)
    }
}
