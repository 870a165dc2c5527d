//! End-to-end membership lifecycle through the application handlers and the
//! flat-file member details store.

use std::sync::Arc;

use gym_tracker::adapters::storage::FlatFileSnapshotStore;
use gym_tracker::application::{
    shared_directory, ActivateMembershipCommand, ActivateMembershipHandler,
    CalculateDiscountCommand, CalculateDiscountHandler, EnrollMemberCommand, EnrollMemberHandler,
    ListMembersHandler, ListMembersQuery, LoadMemberDetailsHandler, LoadMemberDetailsQuery,
    MarkAttendanceCommand, MarkAttendanceHandler, PayDueAmountCommand, PayDueAmountHandler,
    RevertMemberCommand, RevertMemberHandler, RevertTarget, SaveMemberDetailsCommand,
    SaveMemberDetailsHandler, SharedDirectory, UpgradePlanCommand, UpgradePlanHandler,
};
use gym_tracker::domain::enrollment::{EnrollmentForm, EnrollmentPlan};
use gym_tracker::domain::foundation::{ErrorCode, MemberId, Money};
use gym_tracker::domain::membership::{MemberDirectory, PlanTier, ATTENDANCE_LIMIT};
use tempfile::TempDir;

fn form(id: &str, name: &str) -> EnrollmentForm {
    EnrollmentForm {
        id: id.to_string(),
        name: name.to_string(),
        location: "Kathmandu".to_string(),
        phone: "9812345678".to_string(),
        email: "front.desk@example.com".to_string(),
        gender: "Female".to_string(),
        date_of_birth: "1996/02/29".to_string(),
        membership_start_date: "2024/03/01".to_string(),
    }
}

async fn enroll_and_activate(directory: &SharedDirectory, id: u32, plan: EnrollmentPlan) {
    EnrollMemberHandler::new(directory.clone())
        .handle(EnrollMemberCommand {
            form: form(&id.to_string(), "Test Member"),
            plan,
        })
        .await
        .unwrap();
    ActivateMembershipHandler::new(directory.clone())
        .handle(ActivateMembershipCommand {
            member_id: MemberId::new(id),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn regular_member_earns_upgrade_then_reverts() {
    let directory = shared_directory(MemberDirectory::new());
    enroll_and_activate(
        &directory,
        1,
        EnrollmentPlan::MeteredPlan {
            referral_source: "Friend".to_string(),
        },
    )
    .await;

    let attendance = MarkAttendanceHandler::new(directory.clone());
    let upgrade = UpgradePlanHandler::new(directory.clone());
    let upgrade_cmd = |plan: &str| UpgradePlanCommand {
        member_id: MemberId::new(1),
        requested_plan: plan.to_string(),
    };

    let err = upgrade.handle(upgrade_cmd("standard")).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotEligible);

    for _ in 0..ATTENDANCE_LIMIT {
        attendance
            .handle(MarkAttendanceCommand {
                member_id: MemberId::new(1),
            })
            .await
            .unwrap();
    }
    let err = attendance
        .handle(MarkAttendanceCommand {
            member_id: MemberId::new(1),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::AttendanceLimitReached);

    let upgraded = upgrade.handle(upgrade_cmd("Standard")).await.unwrap();
    assert_eq!(upgraded.outcome.tier, PlanTier::Standard);
    assert_eq!(
        upgraded.outcome.to_string(),
        "Plan upgraded to standard at price Rs. 12500.00"
    );

    RevertMemberHandler::new(directory.clone())
        .handle(RevertMemberCommand {
            member_id: MemberId::new(1),
            target: RevertTarget::MeteredPlan {
                removal_reason: "Relocated".to_string(),
            },
        })
        .await
        .unwrap();

    let views = ListMembersHandler::new(directory.clone())
        .handle(ListMembersQuery::default())
        .await
        .unwrap();
    assert_eq!(views.len(), 1);
    assert_eq!(views[0].attendance, 0);
    assert!(!views[0].active);
}

#[tokio::test]
async fn premium_member_pays_in_instalments_and_gets_discount() {
    let directory = shared_directory(MemberDirectory::new());
    enroll_and_activate(
        &directory,
        2,
        EnrollmentPlan::Prepaid {
            personal_trainer: "Coach Maya".to_string(),
        },
    )
    .await;

    let pay = PayDueAmountHandler::new(directory.clone());
    let discount = CalculateDiscountHandler::new(directory.clone());
    let pay_cmd = |amount: &str| PayDueAmountCommand {
        member_id: MemberId::new(2),
        amount: amount.parse::<Money>().unwrap(),
    };

    let err = discount
        .handle(CalculateDiscountCommand {
            member_id: MemberId::new(2),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::DiscountNotEligible);

    let partial = pay.handle(pay_cmd("20000.50")).await.unwrap();
    assert_eq!(
        partial.outcome.to_string(),
        "Payment successful. Remaining amount to be paid: Rs. 29999.50"
    );

    let err = pay.handle(pay_cmd("30000")).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::PaymentOverflow);

    let complete = pay.handle(pay_cmd("29999.50")).await.unwrap();
    assert!(complete.outcome.is_completed());

    let result = discount
        .handle(CalculateDiscountCommand {
            member_id: MemberId::new(2),
        })
        .await
        .unwrap();
    assert_eq!(result.outcome.amount, Money::from_rupees(5_000));
}

#[tokio::test]
async fn saved_report_loads_back_split_by_kind() {
    let dir = TempDir::new().unwrap();
    let store = Arc::new(FlatFileSnapshotStore::new(
        dir.path().join("MemberDetails.txt"),
        dir.path().join("MemberDetails.bak"),
    ));
    let directory = shared_directory(MemberDirectory::new());

    let save = SaveMemberDetailsHandler::new(directory.clone(), store.clone());
    let err = save.handle(SaveMemberDetailsCommand).await.unwrap_err();
    assert_eq!(err.message(), "No members to save");

    enroll_and_activate(
        &directory,
        10,
        EnrollmentPlan::MeteredPlan {
            referral_source: "Poster".to_string(),
        },
    )
    .await;
    enroll_and_activate(
        &directory,
        11,
        EnrollmentPlan::Prepaid {
            personal_trainer: "Coach Maya".to_string(),
        },
    )
    .await;
    PayDueAmountHandler::new(directory.clone())
        .handle(PayDueAmountCommand {
            member_id: MemberId::new(11),
            amount: Money::from_rupees(10_000),
        })
        .await
        .unwrap();

    let saved = save.handle(SaveMemberDetailsCommand).await.unwrap();
    assert_eq!(saved.saved, 2);

    let report = LoadMemberDetailsHandler::new(store)
        .handle(LoadMemberDetailsQuery)
        .await
        .unwrap();

    assert_eq!(report.regular.len(), 1);
    assert_eq!(report.regular[0].id, MemberId::new(10));
    assert_eq!(report.regular[0].plan_or_trainer, "basic");
    assert_eq!(report.premium.len(), 1);
    let settlement = report.premium[0].settlement.as_ref().unwrap();
    assert_eq!(settlement.paid_amount, Money::from_rupees(10_000));
    assert_eq!(settlement.remaining_amount, Money::from_rupees(40_000));
    assert!(!settlement.full_payment);
}
