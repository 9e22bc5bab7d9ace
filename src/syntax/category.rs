//! The closed set of syntax categories a theme styles

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::SyntaxError;

/// A named class of source token that receives its own highlight style
///
/// Ordering follows declaration order, which groups related categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SyntaxCategory {
    // Text
    Comment,
    CommentDoc,
    Primary,
    /// Ghost text such as inline completions
    Predictive,

    // Formatted text
    Emphasis,
    EmphasisStrong,
    Title,
    LinkUri,
    LinkText,
    /// Code spans and code blocks inside prose
    TextLiteral,

    // Punctuation
    Punctuation,
    PunctuationBracket,
    PunctuationDelimiter,
    PunctuationSpecial,
    PunctuationListMarker,

    // Strings
    String,
    StringSpecial,
    StringSpecialSymbol,
    StringEscape,
    StringRegex,

    // Types
    Constructor,
    Variant,
    Type,
    TypeBuiltin,

    // Values
    Variable,
    VariableSpecial,
    Label,
    Tag,
    Attribute,
    Property,
    Constant,
    Keyword,
    Enum,
    Operator,
    Number,
    Boolean,
    ConstantBuiltin,

    // Functions
    Function,
    FunctionBuiltin,
    FunctionCall,
    FunctionDefinition,
    FunctionSpecialDefinition,
    FunctionMethod,
    FunctionMethodBuiltin,

    // Other
    Preproc,
    Embedded,
}

impl SyntaxCategory {
    /// Number of categories
    pub const COUNT: usize = 46;

    /// Every category, in declaration order
    pub const ALL: [SyntaxCategory; Self::COUNT] = [
        SyntaxCategory::Comment,
        SyntaxCategory::CommentDoc,
        SyntaxCategory::Primary,
        SyntaxCategory::Predictive,
        SyntaxCategory::Emphasis,
        SyntaxCategory::EmphasisStrong,
        SyntaxCategory::Title,
        SyntaxCategory::LinkUri,
        SyntaxCategory::LinkText,
        SyntaxCategory::TextLiteral,
        SyntaxCategory::Punctuation,
        SyntaxCategory::PunctuationBracket,
        SyntaxCategory::PunctuationDelimiter,
        SyntaxCategory::PunctuationSpecial,
        SyntaxCategory::PunctuationListMarker,
        SyntaxCategory::String,
        SyntaxCategory::StringSpecial,
        SyntaxCategory::StringSpecialSymbol,
        SyntaxCategory::StringEscape,
        SyntaxCategory::StringRegex,
        SyntaxCategory::Constructor,
        SyntaxCategory::Variant,
        SyntaxCategory::Type,
        SyntaxCategory::TypeBuiltin,
        SyntaxCategory::Variable,
        SyntaxCategory::VariableSpecial,
        SyntaxCategory::Label,
        SyntaxCategory::Tag,
        SyntaxCategory::Attribute,
        SyntaxCategory::Property,
        SyntaxCategory::Constant,
        SyntaxCategory::Keyword,
        SyntaxCategory::Enum,
        SyntaxCategory::Operator,
        SyntaxCategory::Number,
        SyntaxCategory::Boolean,
        SyntaxCategory::ConstantBuiltin,
        SyntaxCategory::Function,
        SyntaxCategory::FunctionBuiltin,
        SyntaxCategory::FunctionCall,
        SyntaxCategory::FunctionDefinition,
        SyntaxCategory::FunctionSpecialDefinition,
        SyntaxCategory::FunctionMethod,
        SyntaxCategory::FunctionMethodBuiltin,
        SyntaxCategory::Preproc,
        SyntaxCategory::Embedded,
    ];

    /// The dotted key themes use for this category (e.g. `comment.doc`)
    pub fn key(self) -> &'static str {
        match self {
            SyntaxCategory::Comment => "comment",
            SyntaxCategory::CommentDoc => "comment.doc",
            SyntaxCategory::Primary => "primary",
            SyntaxCategory::Predictive => "predictive",
            SyntaxCategory::Emphasis => "emphasis",
            SyntaxCategory::EmphasisStrong => "emphasis.strong",
            SyntaxCategory::Title => "title",
            SyntaxCategory::LinkUri => "link_uri",
            SyntaxCategory::LinkText => "link_text",
            SyntaxCategory::TextLiteral => "text.literal",
            SyntaxCategory::Punctuation => "punctuation",
            SyntaxCategory::PunctuationBracket => "punctuation.bracket",
            SyntaxCategory::PunctuationDelimiter => "punctuation.delimiter",
            SyntaxCategory::PunctuationSpecial => "punctuation.special",
            SyntaxCategory::PunctuationListMarker => "punctuation.list_marker",
            SyntaxCategory::String => "string",
            SyntaxCategory::StringSpecial => "string.special",
            SyntaxCategory::StringSpecialSymbol => "string.special.symbol",
            SyntaxCategory::StringEscape => "string.escape",
            SyntaxCategory::StringRegex => "string.regex",
            SyntaxCategory::Constructor => "constructor",
            SyntaxCategory::Variant => "variant",
            SyntaxCategory::Type => "type",
            SyntaxCategory::TypeBuiltin => "type.builtin",
            SyntaxCategory::Variable => "variable",
            SyntaxCategory::VariableSpecial => "variable.special",
            SyntaxCategory::Label => "label",
            SyntaxCategory::Tag => "tag",
            SyntaxCategory::Attribute => "attribute",
            SyntaxCategory::Property => "property",
            SyntaxCategory::Constant => "constant",
            SyntaxCategory::Keyword => "keyword",
            SyntaxCategory::Enum => "enum",
            SyntaxCategory::Operator => "operator",
            SyntaxCategory::Number => "number",
            SyntaxCategory::Boolean => "boolean",
            SyntaxCategory::ConstantBuiltin => "constant.builtin",
            SyntaxCategory::Function => "function",
            SyntaxCategory::FunctionBuiltin => "function.builtin",
            SyntaxCategory::FunctionCall => "function.call",
            SyntaxCategory::FunctionDefinition => "function.definition",
            SyntaxCategory::FunctionSpecialDefinition => "function.special.definition",
            SyntaxCategory::FunctionMethod => "function.method",
            SyntaxCategory::FunctionMethodBuiltin => "function.method.builtin",
            SyntaxCategory::Preproc => "preproc",
            SyntaxCategory::Embedded => "embedded",
        }
    }

    /// Position of this category within [`SyntaxCategory::ALL`]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SyntaxCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SyntaxCategory {
    type Err = SyntaxError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        SyntaxCategory::ALL
            .into_iter()
            .find(|category| category.key() == key)
            .ok_or_else(|| SyntaxError::UnknownCategory(key.to_string()))
    }
}

impl Serialize for SyntaxCategory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

impl<'de> Deserialize<'de> for SyntaxCategory {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = std::string::String::deserialize(deserializer)?;
        key.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_declaration_order() {
        for (position, category) in SyntaxCategory::ALL.iter().enumerate() {
            assert_eq!(category.index(), position, "{category} is out of place");
        }
    }

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<_> = SyntaxCategory::ALL.iter().map(|c| c.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), SyntaxCategory::COUNT);
    }

    #[test]
    fn parse_dotted_keys() {
        assert_eq!("comment.doc".parse::<SyntaxCategory>().unwrap(), SyntaxCategory::CommentDoc);
        assert_eq!("predictive".parse::<SyntaxCategory>().unwrap(), SyntaxCategory::Predictive);
        assert_eq!(
            "function.special.definition".parse::<SyntaxCategory>().unwrap(),
            SyntaxCategory::FunctionSpecialDefinition
        );
    }

    #[test]
    fn parse_unknown_key_fails() {
        let err = "comment.block".parse::<SyntaxCategory>().unwrap_err();
        assert!(matches!(err, SyntaxError::UnknownCategory(ref key) if key == "comment.block"));
        assert!("Comment".parse::<SyntaxCategory>().is_err());
        assert!("".parse::<SyntaxCategory>().is_err());
    }

    #[test]
    fn serializes_as_dotted_key() {
        let json = serde_json::to_string(&SyntaxCategory::StringEscape).unwrap();
        assert_eq!(json, "\"string.escape\"");
        let parsed: SyntaxCategory = serde_json::from_str("\"link_uri\"").unwrap();
        assert_eq!(parsed, SyntaxCategory::LinkUri);
    }
}
