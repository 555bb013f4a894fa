// Visitor: cost reports over a closed set of contract types.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPriceContract {
    pub cost_per_year: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeAndMaterialsContract {
    pub cost_per_hour: i64,
    pub hours: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupportContract {
    pub cost_per_month: i64,
}

/// One operation over every contract type.
pub trait ReportVisitor {
    type Output;

    fn visit_fixed_price(&self, contract: &FixedPriceContract) -> Self::Output;
    fn visit_time_and_materials(&self, contract: &TimeAndMaterialsContract) -> Self::Output;
    fn visit_support(&self, contract: &SupportContract) -> Self::Output;
}

pub trait ReportVisitable {
    fn accept<V: ReportVisitor>(&self, visitor: &V) -> V::Output;
}

impl ReportVisitable for FixedPriceContract {
    fn accept<V: ReportVisitor>(&self, visitor: &V) -> V::Output {
        visitor.visit_fixed_price(self)
    }
}

impl ReportVisitable for TimeAndMaterialsContract {
    fn accept<V: ReportVisitor>(&self, visitor: &V) -> V::Output {
        visitor.visit_time_and_materials(self)
    }
}

impl ReportVisitable for SupportContract {
    fn accept<V: ReportVisitor>(&self, visitor: &V) -> V::Output {
        visitor.visit_support(self)
    }
}

/// Any contract, so a portfolio can hold a mix of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contract {
    FixedPrice(FixedPriceContract),
    TimeAndMaterials(TimeAndMaterialsContract),
    Support(SupportContract),
}

impl ReportVisitable for Contract {
    fn accept<V: ReportVisitor>(&self, visitor: &V) -> V::Output {
        match self {
            Contract::FixedPrice(c) => c.accept(visitor),
            Contract::TimeAndMaterials(c) => c.accept(visitor),
            Contract::Support(c) => c.accept(visitor),
        }
    }
}

impl From<FixedPriceContract> for Contract {
    fn from(c: FixedPriceContract) -> Self {
        Contract::FixedPrice(c)
    }
}

impl From<TimeAndMaterialsContract> for Contract {
    fn from(c: TimeAndMaterialsContract) -> Self {
        Contract::TimeAndMaterials(c)
    }
}

impl From<SupportContract> for Contract {
    fn from(c: SupportContract) -> Self {
        Contract::Support(c)
    }
}

pub struct MonthlyCostReportVisitor;

impl ReportVisitor for MonthlyCostReportVisitor {
    type Output = i64;

    // Integer division, so yearly contracts lose the remainder.
    fn visit_fixed_price(&self, contract: &FixedPriceContract) -> i64 {
        contract.cost_per_year / 12
    }

    fn visit_time_and_materials(&self, contract: &TimeAndMaterialsContract) -> i64 {
        contract.cost_per_hour * contract.hours
    }

    fn visit_support(&self, contract: &SupportContract) -> i64 {
        contract.cost_per_month
    }
}

pub struct YearlyReportVisitor;

impl ReportVisitor for YearlyReportVisitor {
    type Output = i64;

    fn visit_fixed_price(&self, contract: &FixedPriceContract) -> i64 {
        contract.cost_per_year
    }

    fn visit_time_and_materials(&self, contract: &TimeAndMaterialsContract) -> i64 {
        contract.cost_per_hour * contract.hours
    }

    fn visit_support(&self, contract: &SupportContract) -> i64 {
        contract.cost_per_month * 12
    }
}

pub fn total_cost<V>(contracts: &[Contract], visitor: &V) -> i64
where
    V: ReportVisitor<Output = i64>,
{
    contracts.iter().map(|c| c.accept(visitor)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portfolio() -> Vec<Contract> {
        vec![
            FixedPriceContract { cost_per_year: 10000 }.into(),
            SupportContract { cost_per_month: 500 }.into(),
            TimeAndMaterialsContract { cost_per_hour: 10, hours: 150 }.into(),
            TimeAndMaterialsContract { cost_per_hour: 50, hours: 50 }.into(),
        ]
    }

    #[test]
    fn test_monthly_cost() {
        assert_eq!(total_cost(&portfolio(), &MonthlyCostReportVisitor), 5333);
    }

    #[test]
    fn test_yearly_cost() {
        assert_eq!(total_cost(&portfolio(), &YearlyReportVisitor), 20000);
    }

    #[test]
    fn test_single_contract_accept() {
        let support = SupportContract { cost_per_month: 100 };
        assert_eq!(support.accept(&MonthlyCostReportVisitor), 100);
        assert_eq!(support.accept(&YearlyReportVisitor), 1200);
    }

    struct Describe;

    impl ReportVisitor for Describe {
        type Output = &'static str;

        fn visit_fixed_price(&self, _: &FixedPriceContract) -> &'static str {
            "fixed"
        }

        fn visit_time_and_materials(&self, _: &TimeAndMaterialsContract) -> &'static str {
            "t&m"
        }

        fn visit_support(&self, _: &SupportContract) -> &'static str {
            "support"
        }
    }

    #[test]
    fn test_visitor_with_other_output() {
        let kinds: Vec<&str> = portfolio().iter().map(|c| c.accept(&Describe)).collect();
        assert_eq!(kinds, ["fixed", "support", "t&m", "t&m"]);
    }

    #[test]
    fn test_empty_portfolio_costs_nothing() {
        assert_eq!(total_cost(&[], &YearlyReportVisitor), 0);
    }
}
