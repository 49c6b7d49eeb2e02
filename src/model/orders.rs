// src/model/orders.rs

/// A replenishment order that has been placed but not yet received.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingOrder {
    /// Day the order becomes available: placement day + lead time.
    /// Fractional lead times are kept as-is and compared against the
    /// integer day counter.
    pub arrival_day: f64,
    /// Units on the way.
    pub quantity: f64,
}

/// The set of orders currently in transit.
///
/// Under the single-outstanding-order policy this holds at most one entry,
/// but the book itself does not enforce that; the reorder gate in the
/// engine does.
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    pending: Vec<PendingOrder>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts a new order into the pipeline.
    pub fn place(&mut self, arrival_day: f64, quantity: f64) {
        self.pending.push(PendingOrder {
            arrival_day,
            quantity,
        });
    }

    /// Removes every order due on or before `day` and returns the total
    /// quantity received plus how many orders arrived. Multiple orders
    /// arriving the same day are all processed.
    pub fn receive_due(&mut self, day: u32) -> (f64, usize) {
        let threshold = f64::from(day);
        let mut received_qty = 0.0;
        let mut arrivals = 0;

        self.pending.retain(|order| {
            if order.arrival_day <= threshold {
                received_qty += order.quantity;
                arrivals += 1;
                false
            } else {
                true
            }
        });

        (received_qty, arrivals)
    }

    /// True when nothing is in transit. The engine uses this as the
    /// single-outstanding-order gate.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}
