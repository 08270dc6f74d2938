//! Scenario: Restocking After the Shop
//!
//! Journey: After shopping, the household updates amounts and checks that
//! nothing is left to buy.
//!
//! Steps:
//! 1. Import a pantry from a spreadsheet export
//! 2. Plan from a filled-in sheet
//! 3. Edit amounts to what was bought
//! 4. Re-plan from a sheet carrying the same needs
//!
//! Success Criteria:
//! - The second plan is empty
//! - The pantry export matches the edited amounts

use crate::common::*;

/// SCENARIO: Buy everything on the list, then plan again
#[test]
fn scenario_restock_empties_the_list() {
    let env = TestEnv::new();
    env.write_file("export.csv", SMALL_PANTRY);
    assert_success!(env.run(&["import", "export.csv"]));

    env.write_file("needs.csv", FILLED_NEEDS);
    let result = env.run(&["plan", "--needs", "needs.csv", "--print"]);
    assert_success!(result);
    assert!(result.stdout.contains("- Apples: 3 kg"));
    assert!(result.stdout.contains("- Bread: 0.5 pcs"));

    assert_success!(env.run(&["edit", "--item", "Apples", "--amount", "5"]));
    assert_success!(env.run(&["edit", "--item", "Bread", "--amount", "1"]));

    env.write_file(
        "needs.csv",
        "Item,Category,Current Amount,Unit,Monthly Need,Priority\n\
         Apples,Fruits & Vegetables,5,kg,5,Medium\n\
         Milk,Dairy & Eggs,4,L,2,High\n\
         Bread,Bakery,1,pcs,0.5,High\n",
    );
    let result = env.run(&["plan", "--needs", "needs.csv"]);
    assert_success!(result);
    assert_output_contains!(result, "No items needed for shopping this month!");

    assert_success!(env.run(&["export", "-o", "after.csv"]));
    assert_file_lines!(
        env,
        "after.csv",
        [
            "Item,Category,Current Amount,Unit",
            "Apples,Fruits & Vegetables,5,kg",
            "Milk,Dairy & Eggs,4,L",
            "Bread,Bakery,1,pcs",
        ]
    );
}
