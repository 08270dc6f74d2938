//! Session - explicit application state
//!
//! One `Session` holds everything an interactive run works on: the pantry,
//! the monthly requirement sheet and the last derived shopping list. The
//! interactive loop owns it and hands out `&mut` for mutations, so there is no
//! ambient shared state.
//!
//! Requirement sheets are snapshots. [`Session::open_requirements`] copies the
//! pantry the first time it is called and afterwards returns the same sheet,
//! even if the pantry has changed since. Only [`Session::reset_requirements`]
//! takes a new copy.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::domain::entities::{
    ItemUpdate, Pantry, PantryItem, RequirementEntry, RequirementSheet, RequirementUpdate,
    ShoppingList,
};
use crate::domain::policies::PriorityOrder;
use crate::domain::ports::{PantryStore, ShoppingListSink};
use crate::domain::services::ShoppingListDeriver;
use crate::domain::value_objects::{Category, Unit};
use crate::error::{PantryError, PantryResult};

#[derive(Debug, Clone, Default)]
pub struct Session {
    pantry: Pantry,
    requirements: Option<RequirementSheet>,
    shopping_list: Option<ShoppingList>,
    deriver: ShoppingListDeriver,
}

impl Session {
    pub fn new(order: PriorityOrder) -> Self {
        Self {
            deriver: ShoppingListDeriver::new(order),
            ..Self::default()
        }
    }

    /// Start from an existing pantry (e.g. one loaded from a file).
    pub fn with_pantry(mut self, pantry: Pantry) -> Self {
        self.pantry = pantry;
        self
    }

    pub fn pantry(&self) -> &Pantry {
        &self.pantry
    }

    pub fn requirements(&self) -> Option<&RequirementSheet> {
        self.requirements.as_ref()
    }

    /// Last derived list, `None` until the first calculation.
    pub fn shopping_list(&self) -> Option<&ShoppingList> {
        self.shopping_list.as_ref()
    }

    pub fn priority_order(&self) -> PriorityOrder {
        self.deriver.order()
    }

    pub fn set_priority_order(&mut self, order: PriorityOrder) {
        self.deriver = ShoppingListDeriver::new(order);
    }

    // ------------------------------------------------------------------
    // Pantry
    // ------------------------------------------------------------------

    pub fn add_item(
        &mut self,
        name: &str,
        category: Category,
        current_amount: f64,
        unit: Unit,
    ) -> PantryResult<&PantryItem> {
        let item = PantryItem::from_form(name, category, current_amount, unit)
            .inspect_err(|e| warn!(error = %e, "rejected new pantry item"))?;
        let name = item.name.clone();
        self.pantry
            .insert(item)
            .inspect_err(|e| warn!(error = %e, "rejected new pantry item"))?;
        info!(item = %name, "added pantry item");
        self.pantry
            .get(&name)
            .ok_or(PantryError::ItemNotFound { name })
    }

    pub fn edit_item(&mut self, name: &str, update: &ItemUpdate) -> PantryResult<&PantryItem> {
        let edited = self.pantry.update(name, update)?;
        info!(item = %name, now = %edited.name, "updated pantry item");
        Ok(edited)
    }

    pub fn remove_item(&mut self, name: &str) -> PantryResult<PantryItem> {
        let removed = self.pantry.remove(name)?;
        info!(item = %name, "removed pantry item");
        Ok(removed)
    }

    /// Wholesale replacement, as after a successful import.
    pub fn replace_pantry(&mut self, pantry: Pantry) {
        info!(items = pantry.len(), "replaced pantry");
        self.pantry = pantry;
    }

    /// Load `path` through `store` and replace the pantry with it.
    ///
    /// On any error the current pantry is kept as it was.
    pub fn import_pantry(&mut self, store: &impl PantryStore, path: &Path) -> PantryResult<usize> {
        let pantry = store
            .load(path)
            .inspect_err(|e| warn!(file = %path.display(), error = %e, "pantry import failed"))?;
        let count = pantry.len();
        self.replace_pantry(pantry);
        Ok(count)
    }

    pub fn export_pantry(&self, store: &impl PantryStore, path: &Path) -> PantryResult<()> {
        store.save(path, &self.pantry)?;
        info!(file = %path.display(), items = self.pantry.len(), "exported pantry");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Requirements
    // ------------------------------------------------------------------

    /// The requirement sheet, snapshotting the pantry if there is none yet.
    ///
    /// The whole shopping workflow is closed while the pantry is empty, even
    /// if a sheet was taken earlier.
    pub fn open_requirements(&mut self) -> PantryResult<&RequirementSheet> {
        self.ensure_stocked()?;
        if self.requirements.is_none() {
            debug!(items = self.pantry.len(), "snapshotting pantry into requirements");
            self.requirements = Some(RequirementSheet::snapshot(&self.pantry));
        }
        self.requirements.as_ref().ok_or(PantryError::NoRequirements)
    }

    /// Throw away the current sheet and snapshot the pantry again.
    pub fn reset_requirements(&mut self) -> PantryResult<&RequirementSheet> {
        self.ensure_stocked()?;
        info!(items = self.pantry.len(), "re-snapshotted requirements from pantry");
        Ok(self
            .requirements
            .insert(RequirementSheet::snapshot(&self.pantry)))
    }

    pub fn set_requirement(
        &mut self,
        name: &str,
        update: &RequirementUpdate,
    ) -> PantryResult<&RequirementEntry> {
        self.ensure_stocked()?;
        let sheet = self
            .requirements
            .as_mut()
            .ok_or(PantryError::NoRequirements)?;
        sheet.update(name, update)
    }

    // ------------------------------------------------------------------
    // Shopping list
    // ------------------------------------------------------------------

    /// Run the deriver over the current sheet and keep the result.
    pub fn calculate_shopping_list(&mut self) -> PantryResult<&ShoppingList> {
        self.ensure_stocked()?;
        let sheet = self
            .requirements
            .as_ref()
            .ok_or(PantryError::NoRequirements)?;
        let list = self.deriver.derive(sheet.entries());
        info!(
            entries = list.len(),
            order = %self.deriver.order(),
            "calculated shopping list"
        );
        Ok(self.shopping_list.insert(list))
    }

    fn ensure_stocked(&self) -> PantryResult<()> {
        if self.pantry.is_empty() {
            warn!("shopping workflow needs a non-empty pantry");
            return Err(PantryError::EmptyPantry);
        }
        Ok(())
    }

    pub fn export_shopping_list(
        &self,
        sink: &impl ShoppingListSink,
        path: &Path,
    ) -> PantryResult<()> {
        let list = self
            .shopping_list
            .as_ref()
            .ok_or(PantryError::NoRequirements)?;
        sink.save_shopping_list(path, list)?;
        info!(file = %path.display(), entries = list.len(), "exported shopping list");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Amount, Priority};
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::path::PathBuf;

    /// In-memory table store keyed by path.
    #[derive(Default)]
    struct MemoryTables {
        pantries: RefCell<HashMap<PathBuf, Pantry>>,
        lists: RefCell<HashMap<PathBuf, ShoppingList>>,
    }

    impl PantryStore for MemoryTables {
        fn load(&self, path: &Path) -> PantryResult<Pantry> {
            self.pantries
                .borrow()
                .get(path)
                .cloned()
                .ok_or_else(|| PantryError::Csv {
                    file: path.to_path_buf(),
                    message: "no such table".to_string(),
                })
        }

        fn save(&self, path: &Path, pantry: &Pantry) -> PantryResult<()> {
            self.pantries
                .borrow_mut()
                .insert(path.to_path_buf(), pantry.clone());
            Ok(())
        }
    }

    impl ShoppingListSink for MemoryTables {
        fn save_shopping_list(&self, path: &Path, list: &ShoppingList) -> PantryResult<()> {
            self.lists
                .borrow_mut()
                .insert(path.to_path_buf(), list.clone());
            Ok(())
        }
    }

    fn session_with_apples() -> Session {
        let mut session = Session::default();
        session
            .add_item("Apples", Category::FruitsVegetables, 2.0, Unit::Kilograms)
            .unwrap();
        session
    }

    #[test]
    fn add_item_with_blank_name_adds_nothing() {
        let mut session = Session::default();
        let err = session
            .add_item("", Category::Bakery, 1.0, Unit::Pieces)
            .unwrap_err();
        assert!(err.is_warning());
        assert!(session.pantry().is_empty());
    }

    #[test]
    fn add_duplicate_adds_nothing() {
        let mut session = session_with_apples();
        assert!(session
            .add_item("Apples", Category::FruitsVegetables, 9.0, Unit::Pieces)
            .is_err());
        assert_eq!(session.pantry().len(), 1);
        assert_eq!(
            session.pantry().get("Apples").unwrap().current_amount,
            Amount::new(2.0).unwrap()
        );
    }

    #[test]
    fn apples_scenario() {
        let mut session = session_with_apples();
        session.open_requirements().unwrap();
        session
            .set_requirement("Apples", &RequirementUpdate::new().with_monthly_need(5.0))
            .unwrap();
        let list = session.calculate_shopping_list().unwrap();
        assert_eq!(list.len(), 1);
        let entry = &list.entries()[0];
        assert_eq!(entry.name, "Apples");
        assert_eq!(entry.category, Category::FruitsVegetables);
        assert_eq!(entry.amount_needed, Amount::new(3.0).unwrap());
        assert_eq!(entry.unit, Unit::Kilograms);
        assert_eq!(entry.priority, Priority::Medium);
    }

    #[test]
    fn requirements_need_a_pantry() {
        let mut session = Session::default();
        assert!(matches!(
            session.open_requirements(),
            Err(PantryError::EmptyPantry)
        ));
        assert!(matches!(
            session.calculate_shopping_list(),
            Err(PantryError::EmptyPantry)
        ));
    }

    #[test]
    fn emptied_pantry_closes_the_shopping_workflow() {
        let mut session = session_with_apples();
        session.open_requirements().unwrap();
        session
            .set_requirement("Apples", &RequirementUpdate::new().with_monthly_need(5.0))
            .unwrap();
        session.remove_item("Apples").unwrap();

        assert!(matches!(
            session.open_requirements(),
            Err(PantryError::EmptyPantry)
        ));
        assert!(matches!(
            session.set_requirement("Apples", &RequirementUpdate::new().with_monthly_need(6.0)),
            Err(PantryError::EmptyPantry)
        ));
        assert!(matches!(
            session.calculate_shopping_list(),
            Err(PantryError::EmptyPantry)
        ));
        assert!(session.shopping_list().is_none());

        session
            .add_item("Apples", Category::FruitsVegetables, 2.0, Unit::Kilograms)
            .unwrap();
        let sheet = session.open_requirements().unwrap();
        assert_eq!(
            sheet.get("Apples").unwrap().monthly_need,
            Amount::new(5.0).unwrap()
        );
    }

    #[test]
    fn requirements_are_not_resynced_after_pantry_edits() {
        let mut session = session_with_apples();
        session.open_requirements().unwrap();
        session
            .add_item("Milk", Category::DairyEggs, 1.0, Unit::Liters)
            .unwrap();
        session
            .edit_item("Apples", &ItemUpdate::new().with_current_amount(10.0))
            .unwrap();

        let sheet = session.open_requirements().unwrap();
        assert_eq!(sheet.len(), 1);
        assert_eq!(
            sheet.get("Apples").unwrap().current_amount,
            Amount::new(2.0).unwrap()
        );
    }

    #[test]
    fn reset_requirements_takes_a_new_snapshot() {
        let mut session = session_with_apples();
        session.open_requirements().unwrap();
        session
            .set_requirement("Apples", &RequirementUpdate::new().with_monthly_need(5.0))
            .unwrap();
        session
            .add_item("Milk", Category::DairyEggs, 1.0, Unit::Liters)
            .unwrap();

        let sheet = session.reset_requirements().unwrap();
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.get("Apples").unwrap().monthly_need, Amount::ZERO);
    }

    #[test]
    fn failed_import_keeps_pantry() {
        let mut session = session_with_apples();
        let tables = MemoryTables::default();
        let err = session
            .import_pantry(&tables, Path::new("missing.csv"))
            .unwrap_err();
        assert!(matches!(err, PantryError::Csv { .. }));
        assert!(session.pantry().contains("Apples"));
    }

    #[test]
    fn export_then_import_restores_pantry() {
        let mut session = session_with_apples();
        session
            .add_item("Milk", Category::DairyEggs, 4.0, Unit::Liters)
            .unwrap();
        let tables = MemoryTables::default();
        let path = Path::new("pantry.csv");
        session.export_pantry(&tables, path).unwrap();

        let mut fresh = Session::default();
        assert_eq!(fresh.import_pantry(&tables, path).unwrap(), 2);
        assert_eq!(fresh.pantry(), session.pantry());
    }

    #[test]
    fn export_shopping_list_requires_calculation() {
        let session = session_with_apples();
        let tables = MemoryTables::default();
        assert!(session
            .export_shopping_list(&tables, Path::new("list.csv"))
            .is_err());
    }

    #[test]
    fn priority_order_is_applied() {
        let mut session = Session::new(PriorityOrder::Severity);
        session
            .add_item("Nuts", Category::Snacks, 0.0, Unit::Pack)
            .unwrap();
        session
            .add_item("Chips", Category::Snacks, 0.0, Unit::Pack)
            .unwrap();
        session.open_requirements().unwrap();
        session
            .set_requirement(
                "Nuts",
                &RequirementUpdate::new()
                    .with_monthly_need(1.0)
                    .with_priority(Priority::Low),
            )
            .unwrap();
        session
            .set_requirement("Chips", &RequirementUpdate::new().with_monthly_need(1.0))
            .unwrap();

        let names: Vec<String> = session
            .calculate_shopping_list()
            .unwrap()
            .iter()
            .map(|e| e.name.clone())
            .collect();
        assert_eq!(names, vec!["Chips", "Nuts"]);

        session.set_priority_order(PriorityOrder::Label);
        let names: Vec<String> = session
            .calculate_shopping_list()
            .unwrap()
            .iter()
            .map(|e| e.name.clone())
            .collect();
        assert_eq!(names, vec!["Nuts", "Chips"]);
    }
}
