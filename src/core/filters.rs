use crate::core::budget::parse_budget;
use crate::models::{BrowseFilters, UserProfile};

/// Check if a profile passes the viewer's browse filters
///
/// Every filter is optional; an absent filter lets every profile through.
#[inline]
pub fn matches_filters(profile: &UserProfile, filters: &BrowseFilters) -> bool {
    matches_search(profile, filters.search.as_deref())
        && matches_location(profile, filters.location.as_deref())
        && matches_housing(profile, filters)
        && matches_budget(profile, filters.min_budget, filters.max_budget)
}

/// Free-text search over name and bio
#[inline]
pub fn matches_search(profile: &UserProfile, search: Option<&str>) -> bool {
    let Some(term) = non_blank(search) else {
        return true;
    };

    let contains = |field: Option<&str>| {
        field
            .map(|text| text.to_lowercase().contains(&term))
            .unwrap_or(false)
    };

    contains(profile.display_name()) || contains(profile.bio.as_deref())
}

/// Region substring filter
#[inline]
pub fn matches_location(profile: &UserProfile, location: Option<&str>) -> bool {
    let Some(term) = non_blank(location) else {
        return true;
    };
    profile.attributes.region().to_lowercase().contains(&term)
}

/// Housing status filter; an unrecognized status filter is ignored
#[inline]
pub fn matches_housing(profile: &UserProfile, filters: &BrowseFilters) -> bool {
    match filters.housing_status {
        Some(status) if status.is_known() => profile.attributes.housing_status == status,
        _ => true,
    }
}

/// The profile's budget must meet `[min, max]`; unreadable budgets pass
#[inline]
pub fn matches_budget(profile: &UserProfile, min: Option<u32>, max: Option<u32>) -> bool {
    if min.is_none() && max.is_none() {
        return true;
    }

    match parse_budget(&profile.attributes.monthly_budget) {
        Some(range) => range.intersects(min.unwrap_or(0), max.unwrap_or(u32::MAX)),
        None => true,
    }
}

fn non_blank(term: Option<&str>) -> Option<String> {
    term.map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}
