//! Member directory.
//!
//! Owns every enrolled member and is the only way to look one up by id.
//! Members are stored in enrollment order in an arena with an id index, so
//! reports list them in the order they joined. Reverted members stay here;
//! nothing is ever removed.

use std::collections::HashMap;

use crate::domain::foundation::MemberId;

use super::{Member, MembershipError};

/// Arena of members keyed by id.
///
/// # Invariants
///
/// - no two entries share an id
/// - `index[id]` is the position of that member in `members`
#[derive(Debug, Clone, Default)]
pub struct MemberDirectory {
    members: Vec<Member>,
    index: HashMap<MemberId, usize>,
}

impl MemberDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a member at the end of the enrollment order.
    ///
    /// # Errors
    ///
    /// `DuplicateIdentity` if the id is taken; the directory is unchanged.
    pub fn insert(&mut self, member: impl Into<Member>) -> Result<&Member, MembershipError> {
        let member = member.into();
        let id = member.id();
        if self.index.contains_key(&id) {
            return Err(MembershipError::duplicate_identity(id));
        }

        let position = self.members.len();
        self.members.push(member);
        self.index.insert(id, position);
        Ok(&self.members[position])
    }

    /// # Errors
    ///
    /// `NotFound` if no member has this id.
    pub fn lookup(&self, id: MemberId) -> Result<&Member, MembershipError> {
        self.index
            .get(&id)
            .map(|&position| &self.members[position])
            .ok_or(MembershipError::not_found(id))
    }

    /// # Errors
    ///
    /// `NotFound` if no member has this id.
    pub fn lookup_mut(&mut self, id: MemberId) -> Result<&mut Member, MembershipError> {
        match self.index.get(&id) {
            Some(&position) => Ok(&mut self.members[position]),
            None => Err(MembershipError::not_found(id)),
        }
    }

    pub fn contains(&self, id: MemberId) -> bool {
        self.index.contains_key(&id)
    }

    /// All members in enrollment order. The iterator is cheap to clone, so
    /// it can be restarted, and the borrow keeps the directory unchanged
    /// while it is alive.
    pub fn all(&self) -> std::slice::Iter<'_, Member> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<'a> IntoIterator for &'a MemberDirectory {
    type Item = &'a Member;
    type IntoIter = std::slice::Iter<'a, Member>;

    fn into_iter(self) -> Self::IntoIter {
        self.all()
    }
}
