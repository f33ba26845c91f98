//! Composite termination.

use super::Termination;
use crate::scope::BalancerScope;

/// Terminates when any child terminates. Empty means never.
#[derive(Debug, Default)]
pub struct OrTermination {
    children: Vec<Box<dyn Termination>>,
}

impl OrTermination {
    pub fn new(children: Vec<Box<dyn Termination>>) -> Self {
        Self { children }
    }

    pub fn push(&mut self, child: impl Termination + 'static) {
        self.children.push(Box::new(child));
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }
}

impl Termination for OrTermination {
    fn is_terminated(&self, scope: &BalancerScope) -> bool {
        self.children.iter().any(|t| t.is_terminated(scope))
    }
}
