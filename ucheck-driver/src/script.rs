//! JSON check scripts
//!
//! A check script stands in for a front end: it declares symbols and lists
//! the checks a real AST walk would perform.
//!
//! ```json
//! {
//!   "config": { "union-equality": "by-name" },
//!   "fields": { "Point": ["x", "y"] },
//!   "symbols": [ { "name": "x", "type": ["int", "string", "Point"] } ],
//!   "checks": [
//!     { "op": "assign", "symbol": "x", "type": "int" },
//!     { "op": "is", "symbol": "x", "target": "Point",
//!       "then": [ { "op": "field", "symbol": "x", "field": "x" } ] }
//!   ]
//! }
//! ```
//!
//! A type reference is either a string (nominal type) or an array of type
//! references (union). Inside `then`, the tested symbol has its narrowed
//! type.

use log::{debug, info};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;
use ucheck_common::{CompilerError, ErrorReporter};
use ucheck_semantic::{
    BuiltinSchema, CheckerConfig, FieldSchema, Symbol, SymbolTable, TableSchema, Type, TypeChecker,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TypeRef {
    Named(String),
    Union(Vec<TypeRef>),
}

impl TypeRef {
    pub fn resolve(&self) -> Result<Type, CompilerError> {
        match self {
            TypeRef::Named(name) => Ok(Type::nominal(name.as_str())),
            TypeRef::Union(members) => {
                let members = members
                    .iter()
                    .map(TypeRef::resolve)
                    .collect::<Result<Vec<_>, _>>()?;
                Type::try_union(members)
            }
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named(name) => write!(f, "{}", name),
            TypeRef::Union(members) => {
                write!(f, "(")?;
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        write!(f, " | ")?;
                    }
                    write!(f, "{}", member)?;
                }
                write!(f, ")")
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SymbolDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case")]
pub enum Check {
    Assign {
        symbol: String,
        #[serde(rename = "type")]
        value: TypeRef,
    },
    Is {
        symbol: Option<String>,
        #[serde(rename = "type")]
        ty: Option<TypeRef>,
        target: TypeRef,
        #[serde(default)]
        then: Vec<Check>,
    },
    Field {
        symbol: Option<String>,
        #[serde(rename = "type")]
        ty: Option<TypeRef>,
        field: String,
    },
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn subject(symbol: &Option<String>, ty: &Option<TypeRef>) -> String {
            match (symbol, ty) {
                (Some(symbol), _) => symbol.clone(),
                (None, Some(ty)) => ty.to_string(),
                (None, None) => "?".to_string(),
            }
        }

        match self {
            Check::Assign { symbol, value } => write!(f, "{} = <{}>", symbol, value),
            Check::Is { symbol, ty, target, .. } => {
                write!(f, "{} is {}", subject(symbol, ty), target)
            }
            Check::Field { symbol, ty, field } => write!(f, "{}.{}", subject(symbol, ty), field),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub config: CheckerConfig,
    #[serde(default)]
    pub fields: Option<TableSchema>,
    #[serde(default)]
    pub symbols: Vec<SymbolDecl>,
    #[serde(default)]
    pub checks: Vec<Check>,
}

impl Script {
    pub fn from_json(source: &str) -> Result<Self, CompilerError> {
        serde_json::from_str(source).map_err(|e| CompilerError::script_error(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, CompilerError> {
        let source = fs::read_to_string(path)?;
        Self::from_json(&source)
    }
}

/// Runs the checks of a script, collecting every failure
pub struct ScriptRunner<'s> {
    checker: TypeChecker<'s>,
    symbols: SymbolTable,
    /// Innermost narrowing last
    narrowed: Vec<(String, Type)>,
    reporter: ErrorReporter,
}

impl<'s> ScriptRunner<'s> {
    pub fn new(checker: TypeChecker<'s>) -> Self {
        Self {
            checker,
            symbols: SymbolTable::new(),
            narrowed: Vec::new(),
            reporter: ErrorReporter::new(),
        }
    }

    pub fn declare(&mut self, decl: &SymbolDecl) {
        let result = decl
            .ty
            .resolve()
            .and_then(|ty| self.symbols.declare(Symbol::new(decl.name.as_str(), ty)));

        match result {
            Ok(id) => debug!("declared symbol #{} '{}'", id, decl.name),
            Err(e) => {
                self.reporter
                    .report(&e)
                    .notes
                    .push(format!("while declaring '{}'", decl.name));
            }
        }
    }

    pub fn run_checks(&mut self, checks: &[Check]) {
        for check in checks {
            self.run_check(check);
        }
    }

    fn run_check(&mut self, check: &Check) {
        info!("check: {}", check);

        if let Err(e) = self.try_check(check) {
            self.reporter
                .report(&e)
                .notes
                .push(format!("while checking `{}`", check));

            if let Check::Is { then, .. } = check {
                if !then.is_empty() {
                    self.reporter.note(format!(
                        "skipped {} check{} guarded by `{}`",
                        then.len(),
                        if then.len() == 1 { "" } else { "s" },
                        check
                    ));
                }
            }
        }
    }

    fn try_check(&mut self, check: &Check) -> Result<(), CompilerError> {
        match check {
            Check::Assign { symbol, value } => {
                let value = value.resolve()?;
                let symbol = self.symbols.resolve(symbol)?;
                self.checker.check_assignment(symbol, &value)?;
            }
            Check::Is { symbol, ty, target, then } => {
                let subject = self.subject_type(symbol, ty)?;
                let target = target.resolve()?;
                let narrowed = self.checker.check_is(&subject, &target)?.clone();

                match symbol {
                    Some(name) => {
                        self.narrowed.push((name.clone(), narrowed));
                        self.run_checks(then);
                        self.narrowed.pop();
                    }
                    None => self.run_checks(then),
                }
            }
            Check::Field { symbol, ty, field } => {
                let subject = self.subject_type(symbol, ty)?;
                self.checker.check_field_access(&subject, field)?;
            }
        }
        Ok(())
    }

    /// Current static type of a check's subject, honoring enclosing narrowings
    fn subject_type(
        &self,
        symbol: &Option<String>,
        ty: &Option<TypeRef>,
    ) -> Result<Type, CompilerError> {
        match (symbol, ty) {
            (Some(name), None) => {
                if let Some((_, ty)) = self.narrowed.iter().rev().find(|(n, _)| n == name) {
                    return Ok(ty.clone());
                }
                Ok(self.symbols.resolve(name)?.ty.clone())
            }
            (None, Some(ty)) => ty.resolve(),
            _ => Err(CompilerError::script_error(
                "a check needs exactly one of 'symbol' or 'type'".to_string(),
            )),
        }
    }

    pub fn into_reporter(self) -> ErrorReporter {
        self.reporter
    }
}

/// Run a whole script. `config` overrides the script's own configuration.
pub fn run_script(script: &Script, config: Option<CheckerConfig>) -> ErrorReporter {
    let schema: &dyn FieldSchema = match &script.fields {
        Some(table) => table,
        None => &BuiltinSchema,
    };
    let config = config.unwrap_or_else(|| script.config.clone());
    info!("running {} checks ({:?})", script.checks.len(), config.union_equality);

    let mut runner = ScriptRunner::new(TypeChecker::with_config(schema, config));
    for decl in &script.symbols {
        runner.declare(decl);
    }
    runner.run_checks(&script.checks);
    runner.into_reporter()
}

/// Machine-readable report printed by `ucheck check --json`
pub fn json_report(input: &Path, reporter: &ErrorReporter) -> serde_json::Value {
    serde_json::json!({
        "input": input.display().to_string(),
        "summary": reporter.summary(),
        "diagnostics": reporter.diagnostics(),
    })
}
