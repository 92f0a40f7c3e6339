//! Admission gate for pod groups.
//!
//! A pod names its group with `podGroup` and the smallest group size it is
//! willing to start with through `minAvailable`. Until that many members of
//! the group are visible, the pod is held back as unschedulable.
//!
//! Members are counted from the pod lister, deduplicated by pod id. The pod
//! under evaluation always counts toward its own group exactly once, whether
//! or not the listing already contains it.

use std::collections::HashSet;
use std::fmt;

use shared::models::pod::Pod;
use uuid::Uuid;

use crate::errors::GangError;
use crate::framework::lister::{LabelSelector, PodLister};

pub const GROUP_NAME_LABEL: &str = "podGroup";
pub const MIN_AVAILABLE_LABEL: &str = "minAvailable";

/// Group membership declared by a pod's labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSpec<'a> {
    pub group: &'a str,
    pub min_available: usize,
}

impl<'a> GroupSpec<'a> {
    pub fn from_pod(pod: &'a Pod) -> Result<Self, GangError> {
        let missing = |label| GangError::MissingLabel {
            pod: pod.metadata.name.clone(),
            label,
        };
        let group = pod
            .metadata
            .label(GROUP_NAME_LABEL)
            .ok_or_else(|| missing(GROUP_NAME_LABEL))?;
        let raw_min = pod
            .metadata
            .label(MIN_AVAILABLE_LABEL)
            .ok_or_else(|| missing(MIN_AVAILABLE_LABEL))?;

        let min_available =
            raw_min
                .parse::<usize>()
                .map_err(|source| GangError::InvalidMinAvailable {
                    value: raw_min.to_string(),
                    source,
                })?;

        Ok(Self {
            group,
            min_available,
        })
    }

    pub fn selector(&self) -> LabelSelector {
        LabelSelector::from_set([(GROUP_NAME_LABEL, self.group)])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Admitted {
        members: usize,
    },
    /// Group too small for now, the host retries later
    Unschedulable {
        members: usize,
        min_available: usize,
    },
}

impl Admission {
    /// Admits iff `members >= min_available`.
    pub fn evaluate(members: usize, min_available: usize) -> Self {
        if members < min_available {
            Admission::Unschedulable {
                members,
                min_available,
            }
        } else {
            Admission::Admitted { members }
        }
    }

    pub fn is_admitted(&self) -> bool {
        matches!(self, Admission::Admitted { .. })
    }

    pub fn members(&self) -> usize {
        match self {
            Admission::Admitted { members } | Admission::Unschedulable { members, .. } => *members,
        }
    }
}

impl fmt::Display for Admission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Admission::Admitted { members } => write!(f, "admitted with {} members", members),
            Admission::Unschedulable {
                members,
                min_available,
            } => write!(
                f,
                "not enough pods in the group: {} of {}",
                members, min_available
            ),
        }
    }
}

/// Distinct members of the listing plus the pod itself.
pub fn count_members(pod: &Pod, listed: &[Pod]) -> usize {
    let mut ids: HashSet<Uuid> = listed.iter().map(|p| p.metadata.id).collect();
    ids.insert(pod.metadata.id);
    ids.len()
}

/// Decide whether the pod's group is large enough to proceed.
pub async fn admit(lister: &dyn PodLister, pod: &Pod) -> Result<Admission, GangError> {
    let spec = GroupSpec::from_pod(pod)?;

    let selector = spec.selector();
    let listed = lister.list(&selector).await?;
    let members = count_members(pod, &listed);

    tracing::debug!(
        pod=%pod.metadata.name,
        group=%spec.group,
        members,
        min_available=spec.min_available,
        "Counted group members"
    );

    Ok(Admission::evaluate(members, spec.min_available))
}
