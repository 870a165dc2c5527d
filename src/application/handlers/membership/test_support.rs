//! Shared fixtures for handler tests.

use crate::application::{shared_directory, SharedDirectory};
use crate::domain::foundation::MemberId;
use crate::domain::membership::{
    Member, MemberDirectory, MemberProfile, MeteredPlanMember, PrepaidMember,
};

pub fn profile(name: &str) -> MemberProfile {
    MemberProfile {
        name: name.to_string(),
        location: "Lalitpur".to_string(),
        phone: "9841000000".to_string(),
        email: "member@example.com".to_string(),
        gender: "Other".to_string(),
        date_of_birth: "1990/01/01".to_string(),
        membership_start_date: "2024/01/01".to_string(),
    }
}

pub fn regular(id: u32) -> MeteredPlanMember {
    MeteredPlanMember::new(MemberId::new(id), profile("Regular Member"), "Website")
}

pub fn premium(id: u32) -> PrepaidMember {
    PrepaidMember::new(MemberId::new(id), profile("Premium Member"), "Coach Bimal")
}

pub fn active_regular(id: u32) -> MeteredPlanMember {
    let mut member = regular(id);
    member.activate();
    member
}

pub fn active_premium(id: u32) -> PrepaidMember {
    let mut member = premium(id);
    member.activate();
    member
}

pub fn directory_with(members: Vec<Member>) -> SharedDirectory {
    let mut directory = MemberDirectory::new();
    for member in members {
        directory.insert(member).unwrap();
    }
    shared_directory(directory)
}
