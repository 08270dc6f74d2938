//! Contracts on amounts in generated files.

use crate::common::*;

/// CONTRACT: Every Amount Needed in an exported list is strictly positive.
#[test]
fn contract_shopping_list_amounts_are_positive() {
    let env = TestEnv::new();
    env.write_file(
        "needs.csv",
        "Item,Category,Current Amount,Unit,Monthly Need,Priority\n\
         Rice,Pantry Staples,2,kg,2,High\n\
         Oats,Pantry Staples,3,kg,1,High\n\
         Beans,Pantry Staples,0,kg,,Low\n\
         Tea,Beverages,1,box,4,\n",
    );

    let result = env.run(&["plan", "--needs", "needs.csv", "-o", "list.csv"]);

    assert_success!(result);
    assert_file_lines!(
        env,
        "list.csv",
        ["Item,Category,Amount Needed,Unit", "Tea,Beverages,3,box"]
    );
}

/// CONTRACT: Amounts are written as plain decimals, never with a trailing ".0".
#[test]
fn contract_amounts_are_written_compactly() {
    let env = TestEnv::new();

    let result = env.run(&["add", "--name", "Flour", "--category", "pantry-staples", "--amount", "2.0", "--unit", "kg"]);

    assert_success!(result);
    assert!(env.read_file("pantry.csv").contains("Flour,Pantry Staples,2,kg"));
}
