//! Symbols and the flat symbol table

use crate::types::Type;
use std::collections::HashMap;
use ucheck_common::CompilerError;

/// Symbol identifier
pub type SymbolId = u32;

/// A name bound to its declared type
#[derive(Debug, Clone)]
pub struct Symbol {
    pub name: String,
    pub ty: Type,
}

impl Symbol {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Single-scope symbol table. Declarations are final: a name can be
/// declared once and its type never changes.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    by_name: HashMap<String, SymbolId>,
    symbols: Vec<Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a symbol, rejecting a second declaration of the same name
    pub fn declare(&mut self, symbol: Symbol) -> Result<SymbolId, CompilerError> {
        if self.by_name.contains_key(&symbol.name) {
            return Err(CompilerError::Redefinition { name: symbol.name });
        }

        let id = next_symbol_id(self.symbols.len())?;
        self.by_name.insert(symbol.name.clone(), id);
        self.symbols.push(symbol);
        Ok(id)
    }

    pub fn lookup(&self, name: &str) -> Option<SymbolId> {
        self.by_name.get(name).copied()
    }

    pub fn get(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id as usize)
    }

    /// Look up a symbol by name, failing with `UndefinedSymbol`
    pub fn resolve(&self, name: &str) -> Result<&Symbol, CompilerError> {
        self.lookup(name)
            .and_then(|id| self.get(id))
            .ok_or_else(|| CompilerError::UndefinedSymbol {
                name: name.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in declaration order
    pub fn iter(&self) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter()
    }
}

fn next_symbol_id(len: usize) -> Result<SymbolId, CompilerError> {
    SymbolId::try_from(len).map_err(|_| CompilerError::SymbolTableFull { capacity: len })
}
