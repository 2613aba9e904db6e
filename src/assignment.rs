//! Mat Assignment
//!
//! The occupancy state machine of a single mat-night slot. A slot is either
//! unassigned or assigned to exactly one guest; there are no intermediate
//! states. Transitions never mutate a slot in place, they return the slot
//! value to persist.

use jiff::civil::Time;
use thiserror::Error;

/// Why a transition was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError<G> {
    /// The slot is held by another guest.
    #[error("mat is occupied by guest {current}")]
    Occupied {
        /// Guest currently holding the slot.
        current: G,
    },

    /// The slot has no guest to release or move.
    #[error("mat is not currently assigned")]
    NotAssigned,
}

/// Who, if anyone, holds a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupancy<G> {
    /// Open mat.
    Unassigned,

    /// Mat held by a guest.
    Assigned(G),
}

impl<G: Copy> Occupancy<G> {
    /// Build from a nullable guest column.
    pub fn from_guest(guest: Option<G>) -> Self {
        guest.map_or(Self::Unassigned, Self::Assigned)
    }

    /// The occupying guest, if any.
    pub fn guest(self) -> Option<G> {
        match self {
            Self::Unassigned => None,
            Self::Assigned(guest) => Some(guest),
        }
    }

    /// Check whether a guest holds the slot.
    pub fn is_assigned(self) -> bool {
        matches!(self, Self::Assigned(_))
    }
}

/// Details recorded about the occupant of a slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OccupantDetails {
    /// Free-form staff notes.
    pub comments: Option<String>,

    /// How the guest paid.
    pub payment_type: Option<String>,

    /// Amount paid, in minor units.
    pub payment_amount: Option<u64>,

    /// Requested shower slot.
    pub shower_time: Option<Time>,

    /// Requested wakeup call.
    pub wakeup_time: Option<Time>,
}

/// How an accepted assignment affects the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignPlan {
    /// An open mat gains a guest. The guest must not hold another mat that night.
    Occupy,

    /// The guest already holds this mat; only details change.
    UpdateDetails,
}

/// Occupancy of one mat-night slot together with its occupant details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatSlot<G> {
    /// Current occupant.
    pub occupancy: Occupancy<G>,

    /// Details of the current occupant; empty when unassigned.
    pub details: OccupantDetails,
}

impl<G> Default for MatSlot<G> {
    fn default() -> Self {
        Self {
            occupancy: Occupancy::Unassigned,
            details: OccupantDetails::default(),
        }
    }
}

impl<G: Copy + PartialEq> MatSlot<G> {
    /// An open slot with no details.
    pub fn unassigned() -> Self {
        Self::default()
    }

    /// Decide whether `guest` may be assigned to this slot.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::Occupied`] when another guest holds the slot.
    pub fn plan_assign(&self, guest: G) -> Result<AssignPlan, TransitionError<G>> {
        match self.occupancy {
            Occupancy::Unassigned => Ok(AssignPlan::Occupy),
            Occupancy::Assigned(current) if current == guest => Ok(AssignPlan::UpdateDetails),
            Occupancy::Assigned(current) => Err(TransitionError::Occupied { current }),
        }
    }

    /// The slot after assigning `guest` with `details`.
    ///
    /// Details replace whatever was recorded before.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::Occupied`] when another guest holds the slot.
    pub fn assigned(
        &self,
        guest: G,
        details: OccupantDetails,
    ) -> Result<(AssignPlan, Self), TransitionError<G>> {
        let plan = self.plan_assign(guest)?;

        Ok((
            plan,
            Self {
                occupancy: Occupancy::Assigned(guest),
                details,
            },
        ))
    }

    /// The slot after releasing its guest.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::NotAssigned`] when the slot is already open.
    pub fn deassigned(&self) -> Result<Self, TransitionError<G>> {
        if !self.occupancy.is_assigned() {
            return Err(TransitionError::NotAssigned);
        }

        Ok(Self::unassigned())
    }
}

/// Which side of a move refused the transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReassignError<G> {
    /// The source slot has no guest to move.
    #[error("source mat is not currently assigned")]
    SourceUnassigned,

    /// The target slot is held by someone.
    #[error("target mat is occupied by guest {current}")]
    TargetOccupied {
        /// Guest currently holding the target.
        current: G,
    },
}

/// Both slot values produced by moving a guest between mats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reassignment<G> {
    /// The source slot, now open.
    pub vacated: MatSlot<G>,

    /// The target slot, now holding the guest and details moved from the source.
    pub occupied: MatSlot<G>,
}

/// Move the occupant of `from` onto `to`.
///
/// Both values must be persisted together; persisting only one would show
/// the guest on two mats or on none.
///
/// # Errors
///
/// Returns a [`ReassignError`] when `from` is open or `to` is taken.
pub fn reassign<G: Copy + PartialEq>(
    from: &MatSlot<G>,
    to: &MatSlot<G>,
) -> Result<Reassignment<G>, ReassignError<G>> {
    if !from.occupancy.is_assigned() {
        return Err(ReassignError::SourceUnassigned);
    }

    if let Occupancy::Assigned(current) = to.occupancy {
        return Err(ReassignError::TargetOccupied { current });
    }

    Ok(Reassignment {
        vacated: MatSlot::unassigned(),
        occupied: from.clone(),
    })
}

#[cfg(test)]
mod tests {
    use jiff::civil::time;
    use testresult::TestResult;

    use super::*;

    fn details(comments: &str) -> OccupantDetails {
        OccupantDetails {
            comments: Some(comments.to_string()),
            payment_type: Some("cash".to_string()),
            payment_amount: Some(500),
            shower_time: Some(time(6, 30, 0, 0)),
            wakeup_time: Some(time(5, 45, 0, 0)),
        }
    }

    fn held_by(guest: u32) -> MatSlot<u32> {
        MatSlot {
            occupancy: Occupancy::Assigned(guest),
            details: details("settled in"),
        }
    }

    #[test]
    fn assigning_an_open_slot_occupies_it() -> TestResult {
        let (plan, slot) = MatSlot::unassigned().assigned(7, details("new"))?;

        assert_eq!(plan, AssignPlan::Occupy);
        assert_eq!(slot.occupancy, Occupancy::Assigned(7));
        assert_eq!(slot.details, details("new"));

        Ok(())
    }

    #[test]
    fn assigning_the_same_guest_updates_details() -> TestResult {
        let (plan, slot) = held_by(7).assigned(7, details("moved bag"))?;

        assert_eq!(plan, AssignPlan::UpdateDetails);
        assert_eq!(slot.details.comments.as_deref(), Some("moved bag"));

        Ok(())
    }

    #[test]
    fn assigning_another_guest_is_refused() {
        let slot = held_by(7);

        assert_eq!(
            slot.assigned(8, OccupantDetails::default()),
            Err(TransitionError::Occupied { current: 7 })
        );
        assert_eq!(slot.occupancy, Occupancy::Assigned(7));
    }

    #[test]
    fn deassigning_clears_guest_and_details() -> TestResult {
        let slot = held_by(7).deassigned()?;

        assert_eq!(slot, MatSlot::unassigned());
        assert_eq!(slot.occupancy.guest(), None);

        Ok(())
    }

    #[test]
    fn deassigning_an_open_slot_is_refused() {
        assert_eq!(
            MatSlot::<u32>::unassigned().deassigned(),
            Err(TransitionError::NotAssigned)
        );
    }

    #[test]
    fn reassigning_moves_guest_and_details() -> TestResult {
        let from = held_by(7);

        let moved = reassign(&from, &MatSlot::unassigned())?;

        assert_eq!(moved.occupied, from);
        assert_eq!(moved.vacated, MatSlot::unassigned());

        Ok(())
    }

    #[test]
    fn reassigning_onto_an_occupied_slot_is_refused() {
        assert_eq!(
            reassign(&held_by(7), &held_by(9)),
            Err(ReassignError::TargetOccupied { current: 9 })
        );
    }

    #[test]
    fn reassigning_from_an_open_slot_is_refused() {
        assert_eq!(
            reassign(&MatSlot::<u32>::unassigned(), &MatSlot::unassigned()),
            Err(ReassignError::SourceUnassigned)
        );
    }

    #[test]
    fn occupancy_round_trips_nullable_guest() {
        assert_eq!(Occupancy::from_guest(Some(3)), Occupancy::Assigned(3));
        assert_eq!(Occupancy::<u32>::from_guest(None), Occupancy::Unassigned);
        assert!(!Occupancy::<u32>::Unassigned.is_assigned());
    }
}
