//! Scenario: Planning the Monthly Shop
//!
//! Journey: A household records what is on the shelf, says how much of each
//! thing it needs per month, and gets a shopping list.
//!
//! Steps:
//! 1. Add items to an empty pantry
//! 2. Write the requirement sheet
//! 3. Fill in monthly needs and priorities
//! 4. Plan, exporting the list
//!
//! Success Criteria:
//! - Only understocked items are listed, for the difference
//! - High priority first, then by category label
//! - Later pantry edits do not leak into an existing sheet

use crate::common::*;

fn add(env: &TestEnv, name: &str, category: &str, amount: &str, unit: &str) {
    let result = env.run(&[
        "add", "--name", name, "--category", category, "--amount", amount, "--unit", unit,
    ]);
    assert_success!(result);
}

/// SCENARIO: From an empty pantry to an exported shopping list
#[test]
fn scenario_first_monthly_plan() {
    let env = TestEnv::new();

    add(&env, "Apples", "Fruits & Vegetables", "2", "kg");
    add(&env, "Milk", "Dairy & Eggs", "4", "L");
    add(&env, "Bread", "Bakery", "0", "pcs");
    add(&env, "Soap", "Personal Care", "1", "pcs");

    let result = env.run(&["needs", "-o", "needs.csv"]);
    assert_success!(result);

    // The user fills in the sheet in a spreadsheet
    env.write_file(
        "needs.csv",
        "Item,Category,Current Amount,Unit,Monthly Need,Priority\n\
         Apples,Fruits & Vegetables,2,kg,5,Medium\n\
         Milk,Dairy & Eggs,4,L,2,High\n\
         Bread,Bakery,0,pcs,4,High\n\
         Soap,Personal Care,1,pcs,3,Low\n",
    );

    let result = env.run(&["plan", "--needs", "needs.csv", "-o", "list.csv"]);
    assert_success!(result);
    assert_output_contains!(result, "Shopping list (3 items, label order)");

    assert_file_lines!(
        env,
        "list.csv",
        [
            "Item,Category,Amount Needed,Unit",
            "Bread,Bakery,4,pcs",
            "Soap,Personal Care,2,pcs",
            "Apples,Fruits & Vegetables,3,kg",
        ]
    );
}

/// SCENARIO: Pantry changes after the sheet was written
#[test]
fn scenario_sheet_is_a_snapshot() {
    let env = TestEnv::new();
    env.write_file("pantry.csv", SMALL_PANTRY);

    assert_success!(env.run(&["needs", "-o", "needs.csv"]));
    let sheet = env.read_file("needs.csv");

    add(&env, "Coffee", "Beverages", "0", "pack");
    assert_success!(env.run(&["remove", "--item", "Milk"]));

    assert_eq!(env.read_file("needs.csv"), sheet);
    assert_success!(env.run(&["needs", "-o", "needs.csv", "--force"]));
    let refreshed = env.read_file("needs.csv");
    assert!(refreshed.contains("Coffee"));
    assert!(!refreshed.contains("Milk"));
}
