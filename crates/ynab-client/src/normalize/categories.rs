use crate::records::{CategoryGroup, CategoryRecord};

/// Drops hidden or deleted groups, then hidden or deleted categories inside
/// the groups that remain. A group left with no categories is still returned.
pub fn group_visible_categories(groups: Vec<CategoryGroup>) -> Vec<CategoryGroup> {
    groups
        .into_iter()
        .filter(|group| !group.hidden && !group.deleted)
        .map(|mut group| {
            group.categories = visible_categories(std::mem::take(&mut group.categories));
            group
        })
        .collect()
}

pub fn visible_categories(categories: Vec<CategoryRecord>) -> Vec<CategoryRecord> {
    categories
        .into_iter()
        .filter(|category| !category.hidden && !category.deleted)
        .collect()
}
