use iscsigw_common::network::address;

use crate::terminal::print;

pub fn literal(input: &str) {
    print::aligned_line("Literal", address::to_literal(input));
}

pub fn bare(input: &str) {
    print::aligned_line("Bare", address::to_bare(input).to_string());
}
