use super::dto::CartMutation;
use std::collections::VecDeque;

/// Work that must see the cart left by everything queued before it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartJob {
    Mutate(CartMutation),
    /// Reads the cart when its turn comes, not when it was requested
    GenerateBill,
}

/// First-in first-out queue of cart jobs with a single runner.
///
/// `push` tells the caller whether it has to start the runner; the runner
/// keeps calling `next` until it gets `None`, at which point the queue is
/// idle again.
#[derive(Debug, Default)]
pub struct CartJobQueue {
    pending: VecDeque<CartJob>,
    running: bool,
}

impl CartJobQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when no runner is active and the caller must start one
    pub fn push(&mut self, job: CartJob) -> bool {
        self.pending.push_back(job);
        if self.running {
            false
        } else {
            self.running = true;
            true
        }
    }

    pub fn next(&mut self) -> Option<CartJob> {
        let job = self.pending.pop_front();
        if job.is_none() {
            self.running = false;
        }
        job
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jobs_run_in_arrival_order() {
        let mut queue = CartJobQueue::new();
        assert!(queue.push(CartJob::Mutate(CartMutation::add("1"))));
        assert!(!queue.push(CartJob::Mutate(CartMutation::remove("1"))));
        assert!(!queue.push(CartJob::GenerateBill));

        assert_eq!(queue.next(), Some(CartJob::Mutate(CartMutation::add("1"))));
        // Arrives while the runner is busy: goes behind the bill
        assert!(!queue.push(CartJob::Mutate(CartMutation::Clear)));
        assert_eq!(queue.next(), Some(CartJob::Mutate(CartMutation::remove("1"))));
        assert_eq!(queue.next(), Some(CartJob::GenerateBill));
        assert_eq!(queue.next(), Some(CartJob::Mutate(CartMutation::Clear)));
        assert_eq!(queue.next(), None);
        assert!(queue.push(CartJob::GenerateBill));
    }

    #[test]
    fn test_idle_queue_asks_for_a_new_runner() {
        let mut queue = CartJobQueue::new();
        assert!(queue.push(CartJob::GenerateBill));
        assert_eq!(queue.next(), Some(CartJob::GenerateBill));
        assert_eq!(queue.next(), None);
        assert!(queue.push(CartJob::Mutate(CartMutation::Clear)));
    }
}
