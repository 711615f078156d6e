//! PEG grammar for spec files.

use super::{
    Call, Constructor, Documentation, Expr, File, Initializer, ParamType, Parameter, Type,
};

/// A type body holds constructors and nested types in any order.
enum Member<'a> {
    Constructor(Constructor<'a>),
    Type(Type<'a>),
}

peg::parser! {
    pub(super) grammar spec_grammar() for str {

        pub rule file() -> File<'input>
            = _ "package" !ident_char() _ package:dotted() _ ";" _
              types:(t:type_def() _ { t })* ![_]
            { File { package, types } }

        rule type_def() -> Type<'input>
            = doc()? name:ident() _ "{" _ members:(m:member() _ { m })* "}"
            {
                let mut constructors = Vec::new();
                let mut nested_types = Vec::new();
                for member in members {
                    match member {
                        Member::Constructor(c) => constructors.push(c),
                        Member::Type(t) => nested_types.push(t),
                    }
                }
                Type { name, constructors, nested_types }
            }

        rule member() -> Member<'input>
            = c:constructor() { Member::Constructor(c) }
            / t:type_def() { Member::Type(t) }

        rule constructor() -> Constructor<'input>
            = documentation:doc()? name:ident() _
              "(" _ params:(param() ** (_ "," _)) _ ","? _ ")" _
              "{" _ initializers:(i:initializer() _ { i })* "}"
            { Constructor { documentation, name, params, initializers } }

        rule param() -> Parameter<'input>
            = documentation:doc()? name:ident() _ ":" _ param_type:dotted()
            { Parameter { documentation, name, param_type: ParamType::from_name(param_type) } }

        rule initializer() -> Initializer<'input>
            = field:ident() _ "=" _ value:expr() _ ";"
            { Initializer { field, value } }

        rule expr() -> Expr<'input>
            = "true" !ident_char() { Expr::Bool(true) }
            / "false" !ident_char() { Expr::Bool(false) }
            / f:float() { Expr::Float(f) }
            / i:integer() { Expr::Integer(i) }
            / s:string() { Expr::Str(s) }
            / path:dotted() _ "(" _ args:(expr() ** (_ "," _)) _ ","? _ ")"
              { Expr::Call(Call::from_path(path, args)) }
            / path:dotted() { Expr::from_path(path) }

        rule doc() -> Documentation<'input>
            = lines:(l:doc_line() _ { l })+ { Documentation { lines } }

        rule doc_line() -> &'input str
            = "///" " "? line:$([^'\n']*) { line.trim_end() }

        rule ident() -> &'input str
            = quiet!{ $(['a'..='z' | 'A'..='Z' | '_'] ident_char()*) }
            / expected!("identifier")

        rule ident_char()
            = ['a'..='z' | 'A'..='Z' | '0'..='9' | '_']

        rule dotted() -> &'input str
            = $(ident() ++ ".")

        rule float() -> f64
            = n:$("-"? ['0'..='9']+ (("." ['0'..='9']+ exponent()?) / exponent()))
            {? n.parse().or(Err("floating point number")) }

        rule exponent()
            = ['e' | 'E'] ['+' | '-']? ['0'..='9']+

        rule integer() -> i64
            = n:$("-"? ['0'..='9']+) !ident_char()
            {? n.parse().or(Err("64-bit integer")) }

        rule string() -> String
            = "\"" chars:string_char()* "\"" { chars.into_iter().collect() }

        rule string_char() -> char
            = "\\" c:escape() { c }
            / c:[^ '"' | '\\' | '\n'] { c }

        rule escape() -> char
            = "n" { '\n' }
            / "t" { '\t' }
            / "r" { '\r' }
            / "\\" { '\\' }
            / "\"" { '"' }

        rule _ = quiet!{ (whitespace() / comment())* }

        rule whitespace() = [' ' | '\t' | '\r' | '\n']

        rule comment() = "//" !"/" [^'\n']*
    }
}
