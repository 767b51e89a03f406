#![cfg(test)]

mod reachability;
mod reconciliation;
