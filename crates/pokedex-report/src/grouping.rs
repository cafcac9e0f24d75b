use crate::model::{CategorySet, GroupedReport, ProjectedRecord};

/// Every distinct category label carried by at least one record.
pub fn extract_categories(records: &[ProjectedRecord]) -> CategorySet {
    records
        .iter()
        .flat_map(|r| r.category_labels())
        .map(str::to_string)
        .collect()
}

/// Map each category to the records carrying it, preserving record order.
///
/// A record with several categories appears in each of their groups.
pub fn group(categories: &CategorySet, records: &[ProjectedRecord]) -> GroupedReport {
    categories
        .iter()
        .map(|category| {
            let members = records
                .iter()
                .filter(|r| r.has_category(category))
                .cloned()
                .collect();
            (category.clone(), members)
        })
        .collect()
}
