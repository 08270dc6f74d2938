//! Contracts around the files the CLI reads and writes.

use crate::common::*;

/// CONTRACT: A failed import never touches the existing pantry file.
#[test]
fn contract_failed_import_leaves_pantry_untouched() {
    let env = TestEnv::new();
    env.write_file("pantry.csv", SMALL_PANTRY);

    let broken = [
        ("no_unit.csv", PANTRY_WITHOUT_UNIT),
        ("bad_amount.csv", "Item,Category,Current Amount,Unit\nTea,Beverages,x,box\n"),
        ("negative.csv", "Item,Category,Current Amount,Unit\nTea,Beverages,-1,box\n"),
        ("duplicate.csv", "Item,Category,Current Amount,Unit\nTea,Beverages,1,box\nTea,Beverages,2,box\n"),
        ("blank_name.csv", "Item,Category,Current Amount,Unit\n ,Beverages,1,box\n"),
    ];

    for (name, content) in broken {
        env.write_file(name, content);
        let result = env.run(&["import", name]);
        assert!(!result.success, "{} should be rejected", name);
        assert_eq!(
            env.read_file("pantry.csv"),
            SMALL_PANTRY,
            "pantry changed after importing {}",
            name
        );
    }
}

/// CONTRACT: A requirement sheet is never overwritten without --force.
#[test]
fn contract_needs_never_clobbers_without_force() {
    let env = TestEnv::new();
    env.write_file("pantry.csv", SMALL_PANTRY);
    env.write_file("needs.csv", FILLED_NEEDS);

    let result = env.run(&["needs", "--output", "needs.csv"]);

    assert!(!result.success);
    assert_eq!(env.read_file("needs.csv"), FILLED_NEEDS);
}

/// CONTRACT: A rejected edit leaves the pantry file byte-for-byte unchanged.
#[test]
fn contract_rejected_edit_writes_nothing() {
    let env = TestEnv::new();
    env.write_file("pantry.csv", SMALL_PANTRY);

    let rename_clash = env.run(&["edit", "--item", "Milk", "--name", "Bread"]);
    let negative = env.run(&["edit", "--item", "Milk", "--amount", "-2"]);

    assert!(!rename_clash.success);
    assert!(!negative.success);
    assert_eq!(env.read_file("pantry.csv"), SMALL_PANTRY);
}
