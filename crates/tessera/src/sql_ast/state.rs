use super::{FromClauseAccess, SqlExpressionResolver};
use crate::CreationContext;

use std::sync::Arc;

/// Mutable state of one statement-building pass, plus the shared registries
/// it reads from.
#[derive(Debug)]
pub struct SqlAstCreationState {
    creation_context: Arc<CreationContext>,
    resolver: SqlExpressionResolver,
    from_clause: FromClauseAccess,
}

impl SqlAstCreationState {
    pub fn new(creation_context: Arc<CreationContext>) -> Self {
        Self {
            creation_context,
            resolver: SqlExpressionResolver::new(),
            from_clause: FromClauseAccess::default(),
        }
    }

    pub fn creation_context(&self) -> &Arc<CreationContext> {
        &self.creation_context
    }

    pub fn resolver(&self) -> &SqlExpressionResolver {
        &self.resolver
    }

    pub fn resolver_mut(&mut self) -> &mut SqlExpressionResolver {
        &mut self.resolver
    }

    pub fn from_clause(&self) -> &FromClauseAccess {
        &self.from_clause
    }

    pub fn from_clause_mut(&mut self) -> &mut FromClauseAccess {
        &mut self.from_clause
    }
}
