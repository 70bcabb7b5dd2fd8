//! Business need catalog
//!
//! The capability checkboxes offered by the questionnaire's needs step.

use std::collections::HashSet;

use serde::Serialize;

use crate::models::NeedCategory;

/// A selectable business need
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BusinessNeed {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub category: NeedCategory,
}

impl BusinessNeed {
    /// Text shown for this need, falling back to the label
    pub fn display_text(&self) -> &'static str {
        if self.description.is_empty() {
            self.label
        } else {
            self.description
        }
    }

    /// Whether the feature line for this need is highlighted
    pub fn is_highlighted(&self) -> bool {
        self.category == NeedCategory::Advanced || HIGHLIGHTED_NEED_IDS.contains(&self.id)
    }
}

/// Core needs that are always highlighted
pub const HIGHLIGHTED_NEED_IDS: [&str; 3] = ["inventory", "pos", "payment"];

/// All needs in questionnaire display order
pub static BUSINESS_NEEDS: [BusinessNeed; 14] = [
    BusinessNeed {
        id: "inventory",
        label: "Inventory Management",
        description: "Track and manage product inventory, including data migration from legacy systems",
        category: NeedCategory::Core,
    },
    BusinessNeed {
        id: "pos",
        label: "Point of Sale (POS)",
        description: "Process sales and transactions with tailored hardware setup and configuration",
        category: NeedCategory::Core,
    },
    BusinessNeed {
        id: "customers",
        label: "Customer Management",
        description: "Manage customer information, relationships, and purchase history with custom data fields",
        category: NeedCategory::Core,
    },
    BusinessNeed {
        id: "employees",
        label: "Employee Management",
        description: "Track employee information, performance, schedules, and role structures",
        category: NeedCategory::Core,
    },
    BusinessNeed {
        id: "expenses",
        label: "Expense Tracking",
        description: "Monitor, categorize, and import historical business expense data",
        category: NeedCategory::Core,
    },
    BusinessNeed {
        id: "reporting",
        label: "Advanced Reporting & Analytics",
        description: "Generate detailed business reports and analytics via custom dashboards with specific KPIs",
        category: NeedCategory::Advanced,
    },
    BusinessNeed {
        id: "multi",
        label: "Multi-Location Management",
        description: "Operate and manage inventory, sales, and data across multiple business locations",
        category: NeedCategory::Advanced,
    },
    BusinessNeed {
        id: "supply",
        label: "Supply Chain Management",
        description: "Optimize supply chain processes, including supplier data and purchase history migration",
        category: NeedCategory::Core,
    },
    BusinessNeed {
        id: "purchasing",
        label: "Purchasing & Invoicing",
        description: "Manage purchase orders and invoicing with business-specific templates and workflows",
        category: NeedCategory::Core,
    },
    BusinessNeed {
        id: "payment",
        label: "Payment Processing Integration",
        description: "Accept and process payments through integrated systems (e.g., eDahab, WAAFI, Mpesa)",
        category: NeedCategory::Core,
    },
    BusinessNeed {
        id: "website",
        label: "Business Website",
        description: "Maintain a custom website for branding, information, and customer engagement",
        category: NeedCategory::Advanced,
    },
    BusinessNeed {
        id: "security",
        label: "Enhanced Security",
        description: "Implement advanced security features and protocols to protect sensitive business data",
        category: NeedCategory::Advanced,
    },
    BusinessNeed {
        id: "kra",
        label: "KRA (Tax Compliance)",
        description: "Generate and submit statutory reports, including VAT returns and income statements, in compliance with Kenya Revenue Authority regulations",
        category: NeedCategory::Advanced,
    },
    BusinessNeed {
        id: "api",
        label: "API Access",
        description: "Connect the core business system with other software and tools via API for extended functionality",
        category: NeedCategory::Advanced,
    },
];

/// Look up a need by id
pub fn find_need(id: &str) -> Option<&'static BusinessNeed> {
    BUSINESS_NEEDS.iter().find(|need| need.id == id)
}

/// Resolve selected ids to catalog needs, keeping selection order.
///
/// Unknown ids are dropped and repeated ids keep their first position.
pub fn resolve_needs<S: AsRef<str>>(selected: &[S]) -> Vec<&'static BusinessNeed> {
    let mut seen = HashSet::new();
    let mut resolved = Vec::with_capacity(selected.len());

    for id in selected {
        let id = id.as_ref();
        match find_need(id) {
            Some(need) => {
                if seen.insert(need.id) {
                    resolved.push(need);
                } else {
                    tracing::debug!("Ignoring repeated need id: {}", id);
                }
            }
            None => tracing::debug!("Ignoring unknown need id: {}", id),
        }
    }

    resolved
}
