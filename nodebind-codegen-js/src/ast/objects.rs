//! JavaScript object literal and arrow function builders.

use nodebind_codegen::builder::CodeFragment;

use super::string_literal;

/// A `"key": callee(arg)` property in an object literal.
///
/// Keys are always emitted as quoted string literals, so any node id is a
/// valid key.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub key: String,
    pub callee: String,
    pub arg: String,
}

impl Property {
    pub fn call(key: impl Into<String>, callee: impl Into<String>, arg: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            callee: callee.into(),
            arg: arg.into(),
        }
    }

    fn to_line(&self) -> String {
        format!(
            "{}: {}({}),",
            string_literal(&self.key),
            self.callee,
            self.arg
        )
    }
}

/// Builder for JavaScript object literals.
///
/// Properties are emitted in insertion order; a repeated key is emitted
/// again rather than merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsObject {
    properties: Vec<Property>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a `key: callee(arg)` property.
    pub fn call(
        mut self,
        key: impl Into<String>,
        callee: impl Into<String>,
        arg: impl Into<String>,
    ) -> Self {
        self.properties.push(Property::call(key, callee, arg));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// One line per property, each with a trailing comma.
    fn properties_to_fragments(&self) -> Vec<CodeFragment> {
        self.properties
            .iter()
            .map(|p| CodeFragment::Line(p.to_line()))
            .collect()
    }
}

/// An arrow function whose body is a single object literal expression,
/// `(params) => ({ ... })`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowFn {
    pub params: String,
    pub body: JsObject,
}

impl ArrowFn {
    pub fn new(params: impl Into<String>) -> Self {
        Self {
            params: params.into(),
            body: JsObject::new(),
        }
    }

    /// Set the returned object.
    pub fn returning(mut self, body: JsObject) -> Self {
        self.body = body;
        self
    }

    /// Render with `prefix` placed before the parameter list.
    ///
    /// The closing line carries `suffix`, so callers can end the expression
    /// with `;` or `,` as needed.
    pub(crate) fn to_fragments_with(&self, prefix: &str, suffix: &str) -> Vec<CodeFragment> {
        let head = format!("{}({}) => (", prefix, self.params);
        if self.body.is_empty() {
            return vec![CodeFragment::Line(format!("{}{{}}){}", head, suffix))];
        }

        vec![CodeFragment::Block {
            header: format!("{}{{", head),
            body: self.body.properties_to_fragments(),
            close: Some(format!("}}){}", suffix)),
        }]
    }
}

#[cfg(test)]
mod tests {
    use nodebind_codegen::builder::CodeBuilder;

    use super::*;

    fn render(func: &ArrowFn) -> String {
        let mut builder = CodeBuilder::javascript();
        for fragment in func.to_fragments_with("", "") {
            builder.apply_fragment(fragment);
        }
        builder.build()
    }

    #[test]
    fn test_keys_are_quoted() {
        let func = ArrowFn::new("opts").returning(JsObject::new().call("main:A", "handler1", "opts"));
        assert_eq!(render(&func), "(opts) => ({\n  \"main:A\": handler1(opts),\n})\n");
    }

    #[test]
    fn test_keys_are_escaped() {
        let func = ArrowFn::new("opts").returning(JsObject::new().call("a\"b", "handler0", "opts"));
        assert!(render(&func).contains("\"a\\\"b\": handler0(opts),"));
    }

    #[test]
    fn test_repeated_keys_are_kept() {
        let obj = JsObject::new()
            .call("main:B", "handler0", "opts")
            .call("main:B", "handler1", "opts");
        let code = render(&ArrowFn::new("opts").returning(obj));
        assert_eq!(code.matches("\"main:B\"").count(), 2);
    }

    #[test]
    fn test_empty_body() {
        assert!(JsObject::new().is_empty());
        assert_eq!(render(&ArrowFn::new("opts")), "(opts) => ({})\n");
    }
}
