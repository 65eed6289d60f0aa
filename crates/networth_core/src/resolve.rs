//! Parameter lookup by semantic role
//!
//! Roles may repeat within a parameter list; the first match in list order
//! always wins, so callers must never reorder parameters.

use crate::model::{ParameterRole, RoleGroup, RoleTagged};

/// First parameter whose role is exactly `role`
pub fn find_by_role<P: RoleTagged>(parameters: &[P], role: ParameterRole) -> Option<&P> {
    parameters.iter().find(|p| p.role() == role)
}

/// First parameter whose role belongs to `group` (e.g. `money` or `amount`)
pub fn find_in_group<P: RoleTagged>(parameters: &[P], group: RoleGroup) -> Option<&P> {
    parameters.iter().find(|p| group.contains(p.role()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EventParameter, Parameter};

    #[test]
    fn test_first_match_wins() {
        let params = vec![
            Parameter::new(1, ParameterRole::Time, 3.0),
            Parameter::new(2, ParameterRole::Money, 100.0),
            Parameter::new(3, ParameterRole::Time, 9.0),
        ];

        let found = find_by_role(&params, ParameterRole::Time).unwrap();
        assert_eq!(found.value, 3.0);
        assert!(find_by_role(&params, ParameterRole::Rate).is_none());
    }

    #[test]
    fn test_group_spans_aliases() {
        let params = vec![
            EventParameter::new(1, ParameterRole::Time, 0.0),
            EventParameter::new(2, ParameterRole::ExpectedReturn, 0.07),
            EventParameter::new(3, ParameterRole::Amount, 250.0),
        ];

        assert_eq!(
            find_in_group(&params, RoleGroup::Rate).and_then(EventParameter::number),
            Some(0.07)
        );
        assert_eq!(
            find_in_group(&params, RoleGroup::Amount).and_then(EventParameter::number),
            Some(250.0)
        );
        assert!(find_in_group(&params, RoleGroup::Interval).is_none());
    }

    #[test]
    fn test_empty_list() {
        let params: Vec<Parameter> = Vec::new();
        assert!(find_by_role(&params, ParameterRole::Time).is_none());
    }
}
