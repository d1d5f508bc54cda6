/// Raw values typed into the tree form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeForm {
    pub suffix: String,
    pub species: String,
    pub height: String,
    pub dbh: String,
    pub canopy: String,
}

impl TreeForm {
    /// Labels of the fields left blank, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("Tree Name", &self.suffix),
            ("Name", &self.species),
            ("Overall Height", &self.height),
            ("DBH", &self.dbh),
            ("Canopy", &self.canopy),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(label, _)| label)
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}
