//! The 0/1 knapsack problem: select items with the largest total value whose total weight does
//! not exceed the capacity.
//!
//! The relaxation is the bound of Dantzig: the free items are taken greedily by decreasing
//! value/weight ratio and the first item which does not fit is taken fractionally.
use std::rc::Rc;

use bnb_core::branching::BranchDirection;
use bnb_core::branching::NodeState;
use bnb_core::branching::SearchContext;
use bnb_core::branching::Subproblem;
use bnb_core::optimisation::ObjectSense;

use crate::EncodingError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnapsackItem {
    pub value: f64,
    pub weight: f64,
}

/// The items and capacity of a knapsack instance.
#[derive(Debug, Clone)]
pub struct KnapsackInstance {
    capacity: f64,
    items: Vec<KnapsackItem>,
    /// The item indices by decreasing value/weight ratio; ties keep the input order.
    by_ratio: Vec<usize>,
}

impl KnapsackInstance {
    pub fn new(capacity: f64, items: Vec<KnapsackItem>) -> Result<Self, EncodingError> {
        if capacity < 0.0 {
            return Err(EncodingError::NegativeCapacity(capacity));
        }
        if let Some((index, item)) = items
            .iter()
            .enumerate()
            .find(|(_, item)| item.value < 0.0 || item.weight < 0.0)
        {
            return Err(EncodingError::NegativeItem {
                index,
                value: item.value,
                weight: item.weight,
            });
        }

        let ratio = |item: &KnapsackItem| {
            if item.weight == 0.0 {
                f64::INFINITY
            } else {
                item.value / item.weight
            }
        };
        let mut by_ratio = (0..items.len()).collect::<Vec<_>>();
        by_ratio.sort_by(|&a, &b| ratio(&items[b]).total_cmp(&ratio(&items[a])));

        Ok(Self {
            capacity,
            items,
            by_ratio,
        })
    }

    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub fn items(&self) -> &[KnapsackItem] {
        &self.items
    }

    pub fn total_value(&self) -> f64 {
        self.items.iter().map(|item| item.value).sum()
    }
}

/// Which quantity the search optimises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnapsackObjective {
    /// Maximise the value of the selected items.
    SelectedValue,
    /// Minimise the value of the items which are left out.
    UnusedValue,
}

/// A node of the knapsack search tree.
///
/// Raising an item selects it, lowering it leaves it out. After every selection the free items
/// which no longer fit are left out as well, so every leaf respects the capacity.
#[derive(Debug, Clone)]
pub struct Knapsack {
    state: NodeState,
    instance: Rc<KnapsackInstance>,
    objective: KnapsackObjective,
    selected: Vec<Option<bool>>,
    residual_capacity: f64,
    selected_value: f64,
}

impl Knapsack {
    pub fn new(instance: Rc<KnapsackInstance>, objective: KnapsackObjective) -> Self {
        let num_items = instance.items.len();
        let mut root = Self {
            state: NodeState::new(num_items),
            residual_capacity: instance.capacity,
            instance,
            objective,
            selected: vec![None; num_items],
            selected_value: 0.0,
        };
        root.leave_out_items_which_do_not_fit();
        root
    }

    pub fn instance(&self) -> &KnapsackInstance {
        &self.instance
    }

    /// Whether item `index` is selected, left out (`Some(false)`), or still free.
    pub fn is_selected(&self, index: usize) -> Option<bool> {
        self.selected[index]
    }

    fn leave_out_items_which_do_not_fit(&mut self) {
        for index in 0..self.selected.len() {
            if self.selected[index].is_none()
                && self.instance.items[index].weight > self.residual_capacity
            {
                self.selected[index] = Some(false);
                self.state.fix_variable();
            }
        }
    }

    /// The largest value of a fractional completion of the current selection.
    fn dantzig_bound(&self) -> f64 {
        let mut residual = self.residual_capacity;
        let mut bound = self.selected_value;

        for &index in &self.instance.by_ratio {
            if self.selected[index].is_some() {
                continue;
            }

            let item = self.instance.items[index];
            if item.weight <= residual {
                residual -= item.weight;
                bound += item.value;
            } else {
                bound += item.value * residual / item.weight;
                break;
            }
        }

        bound
    }

    fn assert_free(&self, item: usize) {
        assert!(
            item < self.selected.len(),
            "item {item} does not exist in a knapsack with {} items",
            self.selected.len()
        );
        assert!(
            self.selected[item].is_none(),
            "item {item} has already been fixed"
        );
    }
}

impl Subproblem for Knapsack {
    type Item = usize;
    type Solution = Vec<bool>;

    fn node_state(&self) -> &NodeState {
        &self.state
    }

    fn node_state_mut(&mut self) -> &mut NodeState {
        &mut self.state
    }

    fn solve_relaxation(&mut self, _context: &SearchContext) -> f64 {
        let bound = self.dantzig_bound();
        match self.objective {
            KnapsackObjective::SelectedValue => bound,
            KnapsackObjective::UnusedValue => self.instance.total_value() - bound,
        }
    }

    /// The free item with the best value/weight ratio.
    fn select_variable(&self) -> usize {
        self.instance
            .by_ratio
            .iter()
            .copied()
            .find(|&index| self.selected[index].is_none())
            .expect("cannot branch on a knapsack in which every item is fixed")
    }

    fn direction_constructive(&self, _item: usize) -> BranchDirection {
        BranchDirection::LowerFirst
    }

    fn raise(&mut self, item: usize) {
        self.assert_free(item);
        let KnapsackItem { value, weight } = self.instance.items[item];

        self.selected[item] = Some(true);
        self.residual_capacity -= weight;
        self.selected_value += value;
        self.state.fix_variable();

        self.leave_out_items_which_do_not_fit();
    }

    fn lower(&mut self, item: usize) {
        self.assert_free(item);

        self.selected[item] = Some(false);
        self.state.fix_variable();
    }

    fn object_sense(&self) -> ObjectSense {
        match self.objective {
            KnapsackObjective::SelectedValue => ObjectSense::Maximise,
            KnapsackObjective::UnusedValue => ObjectSense::Minimise,
        }
    }

    fn save_solution(&self) -> Vec<bool> {
        self.selected
            .iter()
            .map(|selected| *selected == Some(true))
            .collect()
    }
}
