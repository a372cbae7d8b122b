//! 0/1 knapsack problem instance and fitness evaluation.
//!
//! [`KnapsackProblem`] is the immutable problem definition: an ordered
//! sequence of [`Item`]s plus a weight capacity. [`evaluate`] scores a
//! binary inclusion vector — the total value of included items when their
//! total weight fits within capacity, and exactly `0.0` otherwise.
//! Infeasible solutions are never repaired; scoring them zero lets the
//! evolutionary search select against them naturally.
//!
//! # References
//!
//! - Martello & Toth (1990), *Knapsack Problems: Algorithms and Computer
//!   Implementations*
//!
//! [`evaluate`]: KnapsackProblem::evaluate

/// One item available for inclusion in the knapsack.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Weight consumed when the item is included. Strictly positive.
    pub weight: f64,
    /// Value gained when the item is included. Strictly positive.
    pub value: f64,
}

impl Item {
    /// Creates an item. Validation happens at [`KnapsackProblem::new`].
    pub fn new(weight: f64, value: f64) -> Self {
        Self { weight, value }
    }
}

/// An immutable 0/1 knapsack problem instance.
///
/// Items are index-addressed and their order is fixed for the whole run:
/// position `i` of a solution vector refers to `items()[i]`.
///
/// # Examples
///
/// ```
/// use bandit_ga::knapsack::{Item, KnapsackProblem};
///
/// let problem = KnapsackProblem::new(
///     vec![Item::new(5.0, 10.0), Item::new(4.0, 7.0)],
///     8.0,
/// ).unwrap();
///
/// assert_eq!(problem.evaluate(&[true, false]), 10.0);
/// assert_eq!(problem.evaluate(&[true, true]), 0.0); // over capacity
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnapsackProblem {
    items: Vec<Item>,
    capacity: f64,
}

impl KnapsackProblem {
    /// Creates a validated problem instance.
    ///
    /// Returns `Err` when the item list is empty, any item has a
    /// non-finite or non-positive weight or value, or the capacity is
    /// non-finite or negative. A capacity of zero is accepted: the
    /// instance is degenerate (every non-empty selection is infeasible)
    /// but well-defined.
    pub fn new(items: Vec<Item>, capacity: f64) -> Result<Self, String> {
        if items.is_empty() {
            return Err("item list must not be empty".into());
        }
        for (i, item) in items.iter().enumerate() {
            if !item.weight.is_finite() || item.weight <= 0.0 {
                return Err(format!(
                    "item {} has invalid weight {} (must be finite and positive)",
                    i, item.weight
                ));
            }
            if !item.value.is_finite() || item.value <= 0.0 {
                return Err(format!(
                    "item {} has invalid value {} (must be finite and positive)",
                    i, item.value
                ));
            }
        }
        if !capacity.is_finite() || capacity < 0.0 {
            return Err(format!(
                "capacity must be finite and non-negative, got {capacity}"
            ));
        }
        Ok(Self { items, capacity })
    }

    /// Creates a problem from `(weight, value)` pairs.
    pub fn from_pairs(pairs: &[(f64, f64)], capacity: f64) -> Result<Self, String> {
        let items = pairs.iter().map(|&(w, v)| Item::new(w, v)).collect();
        Self::new(items, capacity)
    }

    /// A 20-item demo instance with varied weights and values, capacity 50.
    pub fn example() -> Self {
        Self::from_pairs(
            &[
                (5.0, 10.0),
                (10.0, 40.0),
                (8.0, 15.0),
                (12.0, 30.0),
                (3.0, 5.0),
                (7.0, 25.0),
                (9.0, 20.0),
                (14.0, 35.0),
                (6.0, 12.0),
                (4.0, 8.0),
                (11.0, 22.0),
                (13.0, 40.0),
                (2.0, 3.0),
                (15.0, 50.0),
                (1.0, 1.0),
                (20.0, 80.0),
                (18.0, 60.0),
                (6.0, 18.0),
                (4.0, 7.0),
                (16.0, 45.0),
            ],
            50.0,
        )
        .expect("example instance is valid")
    }

    /// Number of items (and therefore the solution vector length).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false`: construction rejects empty item lists.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The items, in fixed index order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The weight capacity.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Total weight of the included items.
    ///
    /// # Panics
    /// Panics if `solution` length differs from the item count.
    pub fn solution_weight(&self, solution: &[bool]) -> f64 {
        assert_eq!(
            solution.len(),
            self.items.len(),
            "solution length must match item count"
        );
        self.items
            .iter()
            .zip(solution)
            .filter(|(_, &included)| included)
            .map(|(item, _)| item.weight)
            .sum()
    }

    /// Total value of the included items, ignoring the capacity.
    ///
    /// # Panics
    /// Panics if `solution` length differs from the item count.
    pub fn solution_value(&self, solution: &[bool]) -> f64 {
        assert_eq!(
            solution.len(),
            self.items.len(),
            "solution length must match item count"
        );
        self.items
            .iter()
            .zip(solution)
            .filter(|(_, &included)| included)
            .map(|(item, _)| item.value)
            .sum()
    }

    /// Fitness of a solution: total included value if the included weight
    /// is within capacity, else `0.0`.
    ///
    /// # Panics
    /// Panics if `solution` length differs from the item count.
    pub fn evaluate(&self, solution: &[bool]) -> f64 {
        if self.solution_weight(solution) <= self.capacity {
            self.solution_value(solution)
        } else {
            0.0
        }
    }
}
