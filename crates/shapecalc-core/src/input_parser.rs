//! 尺寸输入解析器
//!
//! 支持的输入格式：
//! - 整数: `5`, `-3`
//! - 小数: `0.25`, `.5`, `2.`
//! - 科学计数法: `1e3`
//! - 空输入（或仅空白）: 表示清空字段
//!
//! `inf`、`NaN` 等非有限值视为无效输入。

use thiserror::Error;

/// 解析错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// 不是数字
    #[error("Not a number: {0}")]
    NotANumber(String),
    /// 数值不是有限值
    #[error("Value is not finite: {0}")]
    NotFinite(String),
}

/// 输入解析器
pub struct InputParser;

impl InputParser {
    /// 解析尺寸输入
    ///
    /// # 返回
    /// - `Ok(None)`: 空输入
    /// - `Ok(Some(v))`: 有限数值
    /// - `Err(_)`: 无法解析
    pub fn parse(input: &str) -> Result<Option<f64>, ParseError> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }

        // 拒绝 "inf"/"nan" 之类的字母拼写，只接受十进制字面量
        if !input
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
        {
            return Err(ParseError::NotANumber(input.to_string()));
        }

        let value = input
            .parse::<f64>()
            .map_err(|_| ParseError::NotANumber(input.to_string()))?;

        if !value.is_finite() {
            return Err(ParseError::NotFinite(input.to_string()));
        }

        Ok(Some(value))
    }

    /// 解析为存储值：空输入为 `None`，无法解析的输入为 NaN
    pub fn parse_lenient(input: &str) -> Option<f64> {
        match Self::parse(input) {
            Ok(value) => value,
            Err(_) => Some(f64::NAN),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(InputParser::parse("5"), Ok(Some(5.0)));
        assert_eq!(InputParser::parse("-3"), Ok(Some(-3.0)));
        assert_eq!(InputParser::parse("+7"), Ok(Some(7.0)));
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(InputParser::parse("0.25"), Ok(Some(0.25)));
        assert_eq!(InputParser::parse(".5"), Ok(Some(0.5)));
        assert_eq!(InputParser::parse("  2.75 "), Ok(Some(2.75)));
    }

    #[test]
    fn test_parse_exponent() {
        assert_eq!(InputParser::parse("1e3"), Ok(Some(1000.0)));
        assert_eq!(InputParser::parse("2.5E-1"), Ok(Some(0.25)));
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(InputParser::parse(""), Ok(None));
        assert_eq!(InputParser::parse("   "), Ok(None));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(InputParser::parse("abc"), Err(ParseError::NotANumber(_))));
        assert!(matches!(InputParser::parse("5abc"), Err(ParseError::NotANumber(_))));
        assert!(matches!(InputParser::parse("-"), Err(ParseError::NotANumber(_))));
        assert!(matches!(InputParser::parse("1.2.3"), Err(ParseError::NotANumber(_))));
        assert!(matches!(InputParser::parse("NaN"), Err(ParseError::NotANumber(_))));
        assert!(matches!(InputParser::parse("inf"), Err(ParseError::NotANumber(_))));
    }

    #[test]
    fn test_parse_overflow_is_not_finite() {
        assert!(matches!(InputParser::parse("1e400"), Err(ParseError::NotFinite(_))));
    }

    #[test]
    fn test_parse_lenient() {
        assert_eq!(InputParser::parse_lenient("4"), Some(4.0));
        assert_eq!(InputParser::parse_lenient(""), None);
        assert!(InputParser::parse_lenient("x").is_some_and(f64::is_nan));
    }
}
