//! Literal encoding of simple values

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::schema::{code_ns, EnumDef, ScalarType};

use super::context::GenerationContext;
use super::ir::{Expression, Literal, Statement};

/// A stored value that cannot be expressed as its declared type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueAnomaly {
    UnknownEnumMember {
        enum_type: &'static str,
        value: String,
    },
    Unparsable {
        wrapper: &'static str,
        value: String,
    },
}

impl fmt::Display for ValueAnomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueAnomaly::UnknownEnumMember { enum_type, value } => {
                write!(f, "'{}' is not a member of {}", value, enum_type)
            }
            ValueAnomaly::Unparsable { wrapper, value } => {
                write!(f, "'{}' cannot be read as {}", value, wrapper)
            }
        }
    }
}

/// Comment that takes the place of an assignment whose value could not be encoded
pub fn anomaly_comment(variable: &str, property: &str, anomaly: &ValueAnomaly) -> Statement {
    Statement::comment(format!(
        "Could not set {}.{}: {}. Set this property manually.",
        variable, property, anomaly
    ))
}

/// Encode a primitive-backed value as a literal-producing expression.
pub fn encode_scalar(
    ty: ScalarType,
    raw: &str,
    ctx: &mut GenerationContext<'_>,
) -> Result<Expression, ValueAnomaly> {
    let unparsable = || ValueAnomaly::Unparsable {
        wrapper: ty.wrapper_name(),
        value: raw.to_string(),
    };
    let literal = match ty {
        ScalarType::String => Literal::Str(raw.to_string()),
        ScalarType::Boolean => Literal::Bool(parse_bool(raw, false).ok_or_else(unparsable)?),
        ScalarType::OnOff => Literal::Bool(parse_bool(raw, true).ok_or_else(unparsable)?),
        ScalarType::Byte => Literal::UInt(parse_unsigned(raw, u8::MAX as u64).ok_or_else(unparsable)?),
        ScalarType::UInt32 => Literal::UInt(parse_unsigned(raw, u32::MAX as u64).ok_or_else(unparsable)?),
        ScalarType::UInt64 => Literal::UInt(parse_unsigned(raw, u64::MAX).ok_or_else(unparsable)?),
        ScalarType::Int16 => Literal::Int(
            parse_signed(raw, i16::MIN as i64, i16::MAX as i64).ok_or_else(unparsable)?,
        ),
        ScalarType::Int32 => Literal::Int(
            parse_signed(raw, i32::MIN as i64, i32::MAX as i64).ok_or_else(unparsable)?,
        ),
        ScalarType::Int64 => Literal::Int(parse_signed(raw, i64::MIN, i64::MAX).ok_or_else(unparsable)?),
        ScalarType::Double => return encode_double(raw, ctx).ok_or_else(unparsable),
        ScalarType::Decimal => {
            let trimmed = raw.trim();
            if trimmed.parse::<f64>().is_err() || trimmed.contains(['e', 'E']) {
                return Err(unparsable());
            }
            Literal::Decimal(trimmed.to_string())
        }
        ScalarType::HexBinary => {
            if raw.len() % 2 != 0 || !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
                return Err(unparsable());
            }
            Literal::Str(raw.to_string())
        }
        ScalarType::Base64Binary => {
            STANDARD.decode(raw.trim()).map_err(|_| unparsable())?;
            Literal::Str(raw.to_string())
        }
        ScalarType::DateTime => {
            if !is_xml_datetime(raw) {
                return Err(unparsable());
            }
            let date_time = ctx.type_ref(code_ns::SYSTEM, "DateTime");
            return Ok(Expression::Invoke {
                target: Some(Box::new(Expression::Type(date_time))),
                method: "Parse".to_string(),
                type_args: Vec::new(),
                args: vec![Expression::str(raw.trim())],
            });
        }
    };
    Ok(Expression::Literal(literal))
}

/// Encode an enumeration value as a member reference on the enum type.
pub fn encode_enum(
    def: &'static EnumDef,
    raw: &str,
    ctx: &mut GenerationContext<'_>,
) -> Result<Expression, ValueAnomaly> {
    let member = def
        .member_for(raw)
        .ok_or_else(|| ValueAnomaly::UnknownEnumMember {
            enum_type: def.type_name,
            value: raw.to_string(),
        })?;
    let enum_type = ctx.type_ref(def.namespace, def.type_name);
    Ok(Expression::member(Expression::Type(enum_type), member.name))
}

fn parse_bool(raw: &str, allow_on_off: bool) -> Option<bool> {
    match raw.trim() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        "on" if allow_on_off => Some(true),
        "off" if allow_on_off => Some(false),
        _ => None,
    }
}

fn parse_unsigned(raw: &str, max: u64) -> Option<u64> {
    raw.trim().parse::<u64>().ok().filter(|v| *v <= max)
}

fn parse_signed(raw: &str, min: i64, max: i64) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|v| (min..=max).contains(v))
}

fn encode_double(raw: &str, ctx: &mut GenerationContext<'_>) -> Option<Expression> {
    // XML Schema spells the special values INF, -INF and NaN
    let special = match raw.trim() {
        "INF" => Some("PositiveInfinity"),
        "-INF" => Some("NegativeInfinity"),
        "NaN" => Some("NaN"),
        _ => None,
    };
    if let Some(member) = special {
        let double = ctx.type_ref(code_ns::SYSTEM, "Double");
        return Some(Expression::member(Expression::Type(double), member));
    }
    let value = raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())?;
    Some(Expression::Literal(Literal::Float(value)))
}

fn is_xml_datetime(raw: &str) -> bool {
    let raw = raw.trim();
    DateTime::parse_from_rfc3339(raw).is_ok()
        || NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").is_ok()
        || NaiveDate::parse_from_str(raw, "%Y-%m-%d").is_ok()
}
