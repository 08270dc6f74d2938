//! Test fixtures - CSV tables shared across tests.

pub const PANTRY_HEADER: &str = "Item,Category,Current Amount,Unit";

/// Three items over two categories
pub const SMALL_PANTRY: &str = "\
Item,Category,Current Amount,Unit
Apples,Fruits & Vegetables,2,kg
Milk,Dairy & Eggs,4,L
Bread,Bakery,0,pcs
";

/// Same as `SMALL_PANTRY` but without the Unit column
pub const PANTRY_WITHOUT_UNIT: &str = "\
Item,Category,Current Amount
Apples,Fruits & Vegetables,2
";

/// Requirement sheet for `SMALL_PANTRY`, filled in
pub const FILLED_NEEDS: &str = "\
Item,Category,Current Amount,Unit,Monthly Need,Priority
Apples,Fruits & Vegetables,2,kg,5,Medium
Milk,Dairy & Eggs,4,L,2,High
Bread,Bakery,0,pcs,0.5,High
";
