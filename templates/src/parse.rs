//! Template document parser.
//!
//! Parses `@prefix` declarations and template definitions from a template
//! source into [`Template`] values. The parser is a single-pass cursor
//! over the source text; `#` starts a comment running to end of line.

use std::collections::HashMap;

use crate::error::TemplateError;
use crate::vocab::OTTR_TRIPLE;

/// One argument of a body triple.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    /// A reference to a signature parameter, bound per row at
    /// instantiation time.
    Parameter {
        /// Parameter name as written (without the `?`).
        name: String,
        /// Position in the signature's parameter list.
        index: usize,
    },
    /// A constant IRI (written as a prefixed name or in angle brackets).
    Iri(String),
    /// A constant string literal.
    Str(String),
    /// A constant integer literal.
    Int(i64),
    /// A constant boolean literal.
    Bool(bool),
}

/// One `ottr:Triple` instance of a template body.
#[derive(Debug, Clone, PartialEq)]
pub struct TriplePattern {
    /// Subject argument; must resolve to an IRI at instantiation time.
    pub subject: Argument,
    /// Predicate argument; must resolve to an IRI at instantiation time.
    pub predicate: Argument,
    /// Object argument.
    pub object: Argument,
}

/// A parsed template: an IRI, an ordered parameter list, and a body of
/// triple patterns.
#[derive(Debug, Clone)]
pub struct Template {
    iri: String,
    parameters: Vec<String>,
    body: Vec<TriplePattern>,
}

impl Template {
    /// The template's IRI.
    #[must_use]
    pub fn iri(&self) -> &str {
        &self.iri
    }

    /// The declared parameter names, in signature order.
    #[must_use]
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// The body triple patterns.
    #[must_use]
    pub fn body(&self) -> &[TriplePattern] {
        &self.body
    }

    pub(crate) fn new(iri: String, parameters: Vec<String>, body: Vec<TriplePattern>) -> Self {
        Self {
            iri,
            parameters,
            body,
        }
    }
}

/// Parses every template definition in a template document.
///
/// # Errors
///
/// Returns a [`TemplateError`] when the document is not well-formed: a
/// syntax error, an undeclared prefix, a non-`ottr:Triple` instance head,
/// a triple with an arity other than 3, or a body reference to an
/// undeclared parameter.
pub fn parse_templates(source: &str) -> Result<Vec<Template>, TemplateError> {
    let mut cursor = Cursor::new(source);
    let mut prefixes: HashMap<String, String> = HashMap::new();
    let mut templates = Vec::new();

    loop {
        cursor.skip_trivia();
        match cursor.peek() {
            None => break,
            Some('@') => parse_prefix(&mut cursor, &mut prefixes)?,
            Some(_) => templates.push(parse_template(&mut cursor, &prefixes)?),
        }
    }
    Ok(templates)
}

/// A raw parsed term, before parameter resolution.
enum RawTerm {
    Iri(String),
    Str(String),
    Int(i64),
    Bool(bool),
    Var(String),
}

impl RawTerm {
    fn describe(&self) -> String {
        match self {
            RawTerm::Iri(iri) => iri.clone(),
            RawTerm::Str(s) => format!("\"{s}\""),
            RawTerm::Int(i) => i.to_string(),
            RawTerm::Bool(b) => b.to_string(),
            RawTerm::Var(name) => format!("?{name}"),
        }
    }
}

fn parse_prefix(
    cursor: &mut Cursor,
    prefixes: &mut HashMap<String, String>,
) -> Result<(), TemplateError> {
    cursor.expect_keyword("@prefix")?;
    cursor.skip_trivia();
    let name = cursor.read_name();
    cursor.expect(':')?;
    cursor.skip_trivia();
    let iri = parse_iri_ref(cursor)?;
    cursor.expect('.')?;
    prefixes.insert(name, iri);
    Ok(())
}

fn parse_template(
    cursor: &mut Cursor,
    prefixes: &HashMap<String, String>,
) -> Result<Template, TemplateError> {
    let head = parse_raw_term(cursor, prefixes)?;
    let RawTerm::Iri(iri) = head else {
        return Err(TemplateError::Syntax(format!(
            "expected a template IRI, found `{}`",
            head.describe()
        )));
    };

    cursor.expect('[')?;
    let parameters = parse_parameters(cursor)?;
    cursor.expect(':')?;
    cursor.expect(':')?;
    cursor.expect('{')?;

    let mut body = Vec::new();
    loop {
        cursor.skip_trivia();
        if cursor.try_eat('}') {
            break;
        }
        body.push(parse_instance(cursor, prefixes, &parameters)?);
        cursor.skip_trivia();
        if cursor.try_eat(',') {
            continue;
        }
        cursor.expect('}')?;
        break;
    }
    cursor.expect('.')?;

    Ok(Template::new(iri, parameters, body))
}

fn parse_parameters(cursor: &mut Cursor) -> Result<Vec<String>, TemplateError> {
    let mut parameters = Vec::new();
    loop {
        cursor.skip_trivia();
        if cursor.try_eat(']') {
            return Ok(parameters);
        }
        cursor.expect('?')?;
        let name = cursor.read_name();
        if name.is_empty() {
            return Err(TemplateError::Syntax(
                "expected a parameter name after `?`".to_owned(),
            ));
        }
        parameters.push(name);
        cursor.skip_trivia();
        if cursor.try_eat(',') {
            continue;
        }
        cursor.expect(']')?;
        return Ok(parameters);
    }
}

fn parse_instance(
    cursor: &mut Cursor,
    prefixes: &HashMap<String, String>,
    parameters: &[String],
) -> Result<TriplePattern, TemplateError> {
    let head = parse_raw_term(cursor, prefixes)?;
    match head {
        RawTerm::Iri(iri) if iri == OTTR_TRIPLE => {}
        other => return Err(TemplateError::UnsupportedInstance(other.describe())),
    }

    cursor.expect('(')?;
    let mut args = Vec::new();
    loop {
        cursor.skip_trivia();
        if cursor.try_eat(')') {
            break;
        }
        args.push(parse_raw_term(cursor, prefixes)?);
        cursor.skip_trivia();
        if cursor.try_eat(',') {
            continue;
        }
        cursor.expect(')')?;
        break;
    }
    if args.len() != 3 {
        return Err(TemplateError::TripleArity(args.len()));
    }

    let mut resolved = args
        .into_iter()
        .map(|arg| resolve_argument(arg, parameters))
        .collect::<Result<Vec<_>, _>>()?;
    let object = resolved.remove(2);
    let predicate = resolved.remove(1);
    let subject = resolved.remove(0);
    Ok(TriplePattern {
        subject,
        predicate,
        object,
    })
}

fn resolve_argument(term: RawTerm, parameters: &[String]) -> Result<Argument, TemplateError> {
    Ok(match term {
        RawTerm::Var(name) => {
            let index = parameters
                .iter()
                .position(|p| *p == name)
                .ok_or_else(|| TemplateError::UnboundParameter(name.clone()))?;
            Argument::Parameter { name, index }
        }
        RawTerm::Iri(iri) => Argument::Iri(iri),
        RawTerm::Str(s) => Argument::Str(s),
        RawTerm::Int(i) => Argument::Int(i),
        RawTerm::Bool(b) => Argument::Bool(b),
    })
}

fn parse_raw_term(
    cursor: &mut Cursor,
    prefixes: &HashMap<String, String>,
) -> Result<RawTerm, TemplateError> {
    cursor.skip_trivia();
    match cursor.peek() {
        Some('<') => Ok(RawTerm::Iri(parse_iri_ref(cursor)?)),
        Some('"') => Ok(RawTerm::Str(parse_string(cursor)?)),
        Some('?') => {
            cursor.bump();
            let name = cursor.read_name();
            if name.is_empty() {
                return Err(TemplateError::Syntax(
                    "expected a parameter name after `?`".to_owned(),
                ));
            }
            Ok(RawTerm::Var(name))
        }
        Some(c) if c.is_ascii_digit() || c == '-' || c == '+' => parse_integer(cursor),
        Some(c) if is_name_char(c) => parse_prefixed_or_keyword(cursor, prefixes),
        Some(c) => Err(TemplateError::Syntax(format!(
            "unexpected character `{c}`"
        ))),
        None => Err(TemplateError::Syntax(
            "unexpected end of input while reading a term".to_owned(),
        )),
    }
}

fn parse_iri_ref(cursor: &mut Cursor) -> Result<String, TemplateError> {
    cursor.expect('<')?;
    let mut iri = String::new();
    loop {
        match cursor.bump() {
            Some('>') => return Ok(iri),
            Some(c) => iri.push(c),
            None => {
                return Err(TemplateError::Syntax(
                    "unterminated IRI reference".to_owned(),
                ))
            }
        }
    }
}

fn parse_string(cursor: &mut Cursor) -> Result<String, TemplateError> {
    cursor.expect('"')?;
    let mut value = String::new();
    loop {
        match cursor.bump() {
            Some('"') => return Ok(value),
            Some('\\') => match cursor.bump() {
                Some('n') => value.push('\n'),
                Some('t') => value.push('\t'),
                Some(c) => value.push(c),
                None => {
                    return Err(TemplateError::Syntax(
                        "unterminated string literal".to_owned(),
                    ))
                }
            },
            Some(c) => value.push(c),
            None => {
                return Err(TemplateError::Syntax(
                    "unterminated string literal".to_owned(),
                ))
            }
        }
    }
}

fn parse_integer(cursor: &mut Cursor) -> Result<RawTerm, TemplateError> {
    let mut text = String::new();
    if let Some(c) = cursor.peek() {
        if c == '-' || c == '+' {
            text.push(c);
            cursor.bump();
        }
    }
    while let Some(c) = cursor.peek() {
        if c.is_ascii_digit() {
            text.push(c);
            cursor.bump();
        } else {
            break;
        }
    }
    text.parse::<i64>()
        .map(RawTerm::Int)
        .map_err(|_| TemplateError::Syntax(format!("invalid integer literal `{text}`")))
}

fn parse_prefixed_or_keyword(
    cursor: &mut Cursor,
    prefixes: &HashMap<String, String>,
) -> Result<RawTerm, TemplateError> {
    let name = cursor.read_name();
    if cursor.try_eat(':') {
        let namespace = prefixes
            .get(&name)
            .ok_or(TemplateError::UnknownPrefix(name))?;
        let local = cursor.read_name();
        return Ok(RawTerm::Iri(format!("{namespace}{local}")));
    }
    match name.as_str() {
        "true" => Ok(RawTerm::Bool(true)),
        "false" => Ok(RawTerm::Bool(false)),
        _ => Err(TemplateError::Syntax(format!(
            "expected a term, found `{name}`"
        ))),
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Character cursor over the source text.
struct Cursor {
    chars: Vec<char>,
    pos: usize,
}

impl Cursor {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if c.is_some() {
            self.pos += 1;
        }
        c
    }

    /// Skips whitespace and `#` comments.
    fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                Some('#') => {
                    while let Some(c) = self.bump() {
                        if c == '\n' {
                            break;
                        }
                    }
                }
                _ => return,
            }
        }
    }

    fn try_eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), TemplateError> {
        self.skip_trivia();
        match self.bump() {
            Some(c) if c == expected => Ok(()),
            Some(c) => Err(TemplateError::Syntax(format!(
                "expected `{expected}`, found `{c}`"
            ))),
            None => Err(TemplateError::Syntax(format!(
                "expected `{expected}`, found end of input"
            ))),
        }
    }

    fn expect_keyword(&mut self, keyword: &str) -> Result<(), TemplateError> {
        for expected in keyword.chars() {
            match self.bump() {
                Some(c) if c == expected => {}
                _ => {
                    return Err(TemplateError::Syntax(format!(
                        "expected `{keyword}`"
                    )))
                }
            }
        }
        Ok(())
    }

    /// Reads a run of name characters (possibly empty).
    fn read_name(&mut self) -> String {
        let mut name = String::new();
        while let Some(c) = self.peek() {
            if is_name_char(c) {
                name.push(c);
                self.bump();
            } else {
                break;
            }
        }
        name
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const HEADER: &str = "@prefix ex: <http://example.org/ns#> .\n\
                          @prefix ottr: <http://ns.ottr.xyz/0.4/> .\n";

    #[test]
    fn parses_signature_in_declared_order() {
        let source = format!(
            "{HEADER}ex:T [ ?id, ?name, ?gender ] :: {{\n\
             ottr:Triple(?id, ex:name, ?name)\n}} ."
        );
        let templates = parse_templates(&source).unwrap();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].iri(), "http://example.org/ns#T");
        assert_eq!(templates[0].parameters(), ["id", "name", "gender"]);
        assert_eq!(templates[0].body().len(), 1);
    }

    #[test]
    fn resolves_prefixed_names_and_full_iris() {
        let source = format!(
            "{HEADER}ex:T [ ?id ] :: {{\n\
             ottr:Triple(?id, <http://www.w3.org/1999/02/22-rdf-syntax-ns#type>, ex:Jaguar)\n}} ."
        );
        let template = parse_templates(&source).unwrap().remove(0);
        let pattern = &template.body()[0];
        assert_eq!(
            pattern.predicate,
            Argument::Iri("http://www.w3.org/1999/02/22-rdf-syntax-ns#type".into())
        );
        assert_eq!(
            pattern.object,
            Argument::Iri("http://example.org/ns#Jaguar".into())
        );
    }

    #[test]
    fn constant_literals_are_typed() {
        let source = format!(
            "{HEADER}ex:T [ ?id ] :: {{\n\
             ottr:Triple(?id, ex:killed, false),\n\
             ottr:Triple(?id, ex:count, 42),\n\
             ottr:Triple(?id, ex:note, \"wild\")\n}} ."
        );
        let template = parse_templates(&source).unwrap().remove(0);
        assert_eq!(template.body()[0].object, Argument::Bool(false));
        assert_eq!(template.body()[1].object, Argument::Int(42));
        assert_eq!(template.body()[2].object, Argument::Str("wild".into()));
    }

    #[test]
    fn comments_are_ignored() {
        let source = format!(
            "{HEADER}# the observation template\n\
             ex:T [ ?id ] :: {{ # body\n\
             ottr:Triple(?id, ex:name, \"x\")\n}} ."
        );
        assert_eq!(parse_templates(&source).unwrap().len(), 1);
    }

    #[test]
    fn unknown_prefix_is_reported() {
        let source = format!("{HEADER}nope:T [ ?id ] :: {{ }} .");
        let err = parse_templates(&source).unwrap_err();
        assert!(matches!(err, TemplateError::UnknownPrefix(p) if p == "nope"));
    }

    #[test]
    fn unbound_parameter_is_reported() {
        let source = format!(
            "{HEADER}ex:T [ ?id ] :: {{\n\
             ottr:Triple(?id, ex:name, ?name)\n}} ."
        );
        let err = parse_templates(&source).unwrap_err();
        assert!(matches!(err, TemplateError::UnboundParameter(p) if p == "name"));
    }

    #[test]
    fn non_triple_instance_head_is_rejected() {
        let source = format!(
            "{HEADER}ex:T [ ?id ] :: {{\n\
             ex:Other(?id, ex:name, \"x\")\n}} ."
        );
        let err = parse_templates(&source).unwrap_err();
        assert!(matches!(err, TemplateError::UnsupportedInstance(_)));
    }

    #[test]
    fn wrong_arity_is_rejected() {
        let source = format!(
            "{HEADER}ex:T [ ?id ] :: {{\n\
             ottr:Triple(?id, ex:name)\n}} ."
        );
        let err = parse_templates(&source).unwrap_err();
        assert!(matches!(err, TemplateError::TripleArity(2)));
    }

    #[test]
    fn unterminated_body_is_a_syntax_error() {
        let source = format!("{HEADER}ex:T [ ?id ] :: {{ ottr:Triple(?id, ex:a, ex:b)");
        let err = parse_templates(&source).unwrap_err();
        assert!(matches!(err, TemplateError::Syntax(_)));
    }
}
