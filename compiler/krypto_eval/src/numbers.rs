use krypto_ast::{ChainElement, Formula, Visitable, Visitor};

/// Gathers literals in the order they appear in the source.
#[derive(Debug, Default)]
struct NumberCollector {
    numbers: Vec<u64>,
}

impl Visitor for NumberCollector {
    type Output = ();

    fn visit_number(&mut self, value: u64) {
        self.numbers.push(value);
    }

    fn visit_chain(&mut self, elements: &[ChainElement]) {
        for element in elements {
            element.operand.accept(self);
        }
    }
}

/// Returns every literal of `formula`, left to right.
pub fn collect_numbers(formula: &Formula) -> Vec<u64> {
    let mut collector = NumberCollector::default();
    formula.accept(&mut collector);
    collector.numbers
}
