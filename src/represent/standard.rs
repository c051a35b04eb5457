//! Standard converters
//!
//!     The converter set a representer ships with. Every converter here is a plain function with
//!     the [`Converter`](super::registry::Converter) signature, so custom registries can reuse
//!     them piecemeal.
//!
//!     Exact entries:
//!         null                      → !!null `null`
//!         String, &'static str, char → !!str
//!         bool                      → !!bool
//!         i8..i128, u8..u128, isize, usize → !!int
//!         f32, f64                  → !!float (`.nan`, `.inf`, `-.inf`)
//!         Vec<u8>                   → !!binary, base64 in literal style
//!
//!     Fallback entries, in priority order:
//!         sequence: List, Vec<Data>              → !!seq
//!         mapping:  Map, BTreeMap<String, Data>  → !!map
//!         set:      BTreeSet<String>             → !!set (mapping to nulls)
//!
//! String quoting
//!
//!     A string whose text would be read back as something other than a string (`null`,
//!     `NULL`, `~`, `true`, `12`, `.inf`, the empty string, ...) is given single-quoted style so
//!     it keeps its type through a round trip. Multi-line strings get literal style when the
//!     default scalar style is plain. Everything else uses the default scalar style.

use super::context::RepresentContext;
use super::data::{Data, List, Map, TypeKey};
use super::registry::{Capability, RegistryBuilder};
use crate::error::{RepresentError, RepresentResult};
use crate::nodes::{FlowStyle, NodeId, ScalarStyle, Tag};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use once_cell::sync::Lazy;
use regex::Regex;
use std::any::Any;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

static IMPLICIT_NULL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:~|null|Null|NULL)$").unwrap());
static IMPLICIT_BOOL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:true|True|TRUE|false|False|FALSE)$").unwrap());
static IMPLICIT_INT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[-+]?[0-9]+|0o[0-7]+|0x[0-9a-fA-F]+)$").unwrap());
static IMPLICIT_FLOAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:[-+]?(?:\.[0-9]+|[0-9]+(?:\.[0-9]*)?)(?:[eE][-+]?[0-9]+)?|[-+]?\.(?:inf|Inf|INF)|\.(?:nan|NaN|NAN))$",
    )
    .unwrap()
});

/// True when `text` written plain would resolve to a non-string type
pub fn resolves_implicitly(text: &str) -> bool {
    text.is_empty()
        || IMPLICIT_NULL.is_match(text)
        || IMPLICIT_BOOL.is_match(text)
        || IMPLICIT_INT.is_match(text)
        || IMPLICIT_FLOAT.is_match(text)
}

fn downcast<T: Any>(data: &Data) -> RepresentResult<&T> {
    data.downcast_ref::<T>()
        .ok_or_else(|| RepresentError::not_representable(data.type_name()))
}

pub fn represent_null(ctx: &mut RepresentContext<'_>, _data: &Data) -> RepresentResult<NodeId> {
    Ok(ctx.represent_scalar(Tag::NULL, "null"))
}

/// String scalar with the quoting rules described in the module docs
pub fn represent_text(ctx: &mut RepresentContext<'_>, text: &str) -> NodeId {
    let default = ctx.settings().default_scalar_style;
    if default.is_plain() && text.contains('\n') {
        ctx.represent_scalar_with_style(Tag::STR, text, ScalarStyle::Literal)
    } else if default.is_plain() && resolves_implicitly(text) {
        ctx.represent_scalar_with_style(Tag::STR, text, ScalarStyle::SingleQuoted)
    } else {
        ctx.represent_scalar(Tag::STR, text)
    }
}

pub fn represent_string(ctx: &mut RepresentContext<'_>, data: &Data) -> RepresentResult<NodeId> {
    let text = downcast::<String>(data)?;
    Ok(represent_text(ctx, text))
}

pub fn represent_static_str(
    ctx: &mut RepresentContext<'_>,
    data: &Data,
) -> RepresentResult<NodeId> {
    let text: &'static str = *downcast::<&'static str>(data)?;
    Ok(represent_text(ctx, text))
}

pub fn represent_char(ctx: &mut RepresentContext<'_>, data: &Data) -> RepresentResult<NodeId> {
    let text = downcast::<char>(data)?.to_string();
    Ok(represent_text(ctx, &text))
}

pub fn represent_bool(ctx: &mut RepresentContext<'_>, data: &Data) -> RepresentResult<NodeId> {
    let value = *downcast::<bool>(data)?;
    Ok(ctx.represent_scalar(Tag::BOOL, if value { "true" } else { "false" }))
}

/// Float text in core-schema spelling; always carries a `.` or an exponent
///
/// Finite values print at their own width, so `1.1f32` stays `1.1`.
pub fn float_text<F>(value: F) -> String
where
    F: Into<f64> + Copy + fmt::Debug,
{
    let wide: f64 = value.into();
    if wide.is_nan() {
        ".nan".to_string()
    } else if wide.is_infinite() {
        let text = if wide > 0.0 { ".inf" } else { "-.inf" };
        text.to_string()
    } else {
        format!("{:?}", value)
    }
}

pub fn represent_f64(ctx: &mut RepresentContext<'_>, data: &Data) -> RepresentResult<NodeId> {
    let value = *downcast::<f64>(data)?;
    Ok(ctx.represent_scalar(Tag::FLOAT, float_text(value)))
}

pub fn represent_f32(ctx: &mut RepresentContext<'_>, data: &Data) -> RepresentResult<NodeId> {
    let value = *downcast::<f32>(data)?;
    Ok(ctx.represent_scalar(Tag::FLOAT, float_text(value)))
}

pub fn represent_binary(ctx: &mut RepresentContext<'_>, data: &Data) -> RepresentResult<NodeId> {
    let encoded = STANDARD.encode(downcast::<Vec<u8>>(data)?);
    Ok(ctx.represent_scalar_with_style(Tag::BINARY, encoded, ScalarStyle::Literal))
}

pub fn represent_sequence_like(
    ctx: &mut RepresentContext<'_>,
    data: &Data,
) -> RepresentResult<NodeId> {
    let items = if let Some(list) = data.as_list() {
        list.items()
    } else {
        downcast::<Vec<Data>>(data)?.clone()
    };
    ctx.represent_sequence(Tag::SEQ, items, FlowStyle::Auto)
}

pub fn represent_mapping_like(
    ctx: &mut RepresentContext<'_>,
    data: &Data,
) -> RepresentResult<NodeId> {
    let entries = if let Some(map) = data.as_map() {
        map.entries()
    } else {
        downcast::<BTreeMap<String, Data>>(data)?
            .iter()
            .map(|(key, value)| (Data::from(key.clone()), value.clone()))
            .collect()
    };
    ctx.represent_mapping(Tag::MAP, entries, FlowStyle::Auto)
}

pub fn represent_set(ctx: &mut RepresentContext<'_>, data: &Data) -> RepresentResult<NodeId> {
    let entries: Vec<(Data, Data)> = downcast::<BTreeSet<String>>(data)?
        .iter()
        .map(|member| (Data::from(member.clone()), Data::null()))
        .collect();
    ctx.represent_mapping(Tag::SET, entries, FlowStyle::Auto)
}

macro_rules! register_integers {
    ($builder:expr, $($ty:ty),+ $(,)?) => {{
        let mut builder = $builder;
        $(
            builder = builder.register_exact::<$ty>(|ctx, data| {
                let text = downcast::<$ty>(data)?.to_string();
                Ok(ctx.represent_scalar(Tag::INT, text))
            });
        )+
        builder
    }};
}

impl RegistryBuilder {
    /// Builder preloaded with the standard converters
    pub fn standard() -> Self {
        let builder = RegistryBuilder::new()
            .register_null(represent_null)
            .register_exact::<String>(represent_string)
            .register_exact::<&'static str>(represent_static_str)
            .register_exact::<char>(represent_char)
            .register_exact::<bool>(represent_bool)
            .register_exact::<f64>(represent_f64)
            .register_exact::<f32>(represent_f32)
            .register_exact::<Vec<u8>>(represent_binary);

        register_integers!(builder, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize)
            .register_fallback(
                Capability::any_of(
                    "sequence",
                    [TypeKey::of::<List>(), TypeKey::of::<Vec<Data>>()],
                ),
                represent_sequence_like,
            )
            .register_fallback(
                Capability::any_of(
                    "mapping",
                    [TypeKey::of::<Map>(), TypeKey::of::<BTreeMap<String, Data>>()],
                ),
                represent_mapping_like,
            )
            .register_fallback(Capability::of::<BTreeSet<String>>(), represent_set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::represent::registry::Registry;
    use rstest::rstest;

    #[rstest]
    #[case("null", true)]
    #[case("NULL", true)]
    #[case("~", true)]
    #[case("", true)]
    #[case("True", true)]
    #[case("-12", true)]
    #[case("0x1F", true)]
    #[case("1.5e3", true)]
    #[case(".inf", true)]
    #[case(".NaN", true)]
    #[case("not-null", false)]
    #[case("nulls", false)]
    #[case("yes", false)]
    #[case("1.2.3", false)]
    fn test_resolves_implicitly(#[case] text: &str, #[case] expected: bool) {
        assert_eq!(resolves_implicitly(text), expected);
    }

    #[rstest]
    #[case(1.0, "1.0")]
    #[case(-0.5, "-0.5")]
    #[case(f64::NAN, ".nan")]
    #[case(f64::INFINITY, ".inf")]
    #[case(f64::NEG_INFINITY, "-.inf")]
    fn test_float_text(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(float_text(value), expected);
    }

    #[rstest]
    #[case(1.1, "1.1")]
    #[case(0.1, "0.1")]
    #[case(-2.0, "-2.0")]
    #[case(f32::NAN, ".nan")]
    #[case(f32::NEG_INFINITY, "-.inf")]
    fn test_float_text_keeps_f32_width(#[case] value: f32, #[case] expected: &str) {
        assert_eq!(float_text(value), expected);
    }

    #[test]
    fn test_standard_registry_contents() {
        let registry = Registry::with_defaults();
        assert!(registry.has_exact::<String>());
        assert!(registry.has_exact::<&'static str>());
        assert!(registry.has_exact::<u128>());
        assert!(registry.has_exact::<Vec<u8>>());
        assert!(registry.null_converter().is_some());
        assert_eq!(
            registry.fallback_names(),
            vec![
                "sequence",
                "mapping",
                std::any::type_name::<BTreeSet<String>>()
            ]
        );
    }

    #[test]
    fn test_fallbacks_match_containers() {
        let registry = Registry::with_defaults();
        assert!(registry.lookup(&Data::list([])).is_some());
        assert!(registry.lookup(&Data::new(Vec::<Data>::new())).is_some());
        assert!(registry.lookup(&Data::map([])).is_some());
        assert!(registry
            .lookup(&Data::new(BTreeMap::<String, Data>::new()))
            .is_some());
        assert!(registry.lookup(&Data::new(BTreeSet::<String>::new())).is_some());
        assert!(registry.lookup(&Data::new(vec![1i64])).is_none());
    }
}
