//! Evaluation of boolean expressions

use super::{BoolExpr, BoolExprInner};
use std::collections::HashMap;
use std::sync::Arc;

impl BoolExpr {
    /// Evaluate the expression with a given variable assignment
    ///
    /// Variables absent from the assignment evaluate to false.
    ///
    /// # Examples
    ///
    /// ```
    /// use boolsynth::BoolExpr;
    /// use std::collections::HashMap;
    /// use std::sync::Arc;
    ///
    /// let a = BoolExpr::variable("a");
    /// let b = BoolExpr::variable("b");
    /// let expr = a.and(&b);
    ///
    /// let mut assignment = HashMap::new();
    /// assignment.insert(Arc::from("a"), true);
    /// assignment.insert(Arc::from("b"), true);
    /// assert!(expr.evaluate(&assignment));
    ///
    /// assignment.insert(Arc::from("b"), false);
    /// assert!(!expr.evaluate(&assignment));
    /// ```
    pub fn evaluate(&self, assignment: &HashMap<Arc<str>, bool>) -> bool {
        match self.inner.as_ref() {
            BoolExprInner::Variable(name) => assignment.get(name).copied().unwrap_or(false),
            BoolExprInner::And(left, right) => {
                left.evaluate(assignment) && right.evaluate(assignment)
            }
            BoolExprInner::Or(left, right) => {
                left.evaluate(assignment) || right.evaluate(assignment)
            }
            BoolExprInner::Xor(left, right) => {
                left.evaluate(assignment) != right.evaluate(assignment)
            }
            BoolExprInner::Not(inner) => !inner.evaluate(assignment),
            BoolExprInner::Constant(value) => *value,
        }
    }

    /// Check if two expressions are logically equivalent
    ///
    /// Compares truth tables over the union of both variable sets.
    /// Exponential in the number of variables; intended for the small
    /// expressions this crate synthesizes.
    ///
    /// # Examples
    ///
    /// ```
    /// use boolsynth::BoolExpr;
    ///
    /// let expr1 = BoolExpr::parse("a * b").unwrap();
    /// let expr2 = BoolExpr::parse("b * a").unwrap();
    /// assert!(expr1.equivalent_to(&expr2));
    /// ```
    pub fn equivalent_to(&self, other: &BoolExpr) -> bool {
        let mut vars = self.collect_variables();
        vars.extend(other.collect_variables());
        let vars: Vec<Arc<str>> = vars.into_iter().collect();

        let mut assignment = HashMap::new();
        for choice in 0u64..(1u64 << vars.len()) {
            for (k, var) in vars.iter().enumerate() {
                assignment.insert(Arc::clone(var), choice >> k & 1 == 1);
            }
            if self.evaluate(&assignment) != other.evaluate(&assignment) {
                return false;
            }
        }
        true
    }
}
