//! Auswahlzustand: die Menge der als besucht markierten Länder.

use indexmap::IndexSet;

/// Geordnete Menge besuchter Länder-Kennungen.
///
/// Logisch eine Menge (Duplikate kollabieren), geordnet (IndexSet) für
/// eine deterministische Persistenz-Reihenfolge. Bewusst permissiv: darf
/// auch Kennungen ohne Katalog-Eintrag halten — maßgeblich für die
/// Renderbarkeit ist allein der Katalog über den Locator.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    visited: IndexSet<String>,
}

impl SelectionState {
    /// Erstellt einen leeren Auswahlzustand.
    pub fn new() -> Self {
        Self {
            visited: IndexSet::new(),
        }
    }

    /// Fügt alle Kennungen hinzu; bereits vorhandene werden verworfen
    /// (idempotent).
    pub fn add<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = String>,
    {
        for id in ids {
            self.visited.insert(id);
        }
    }

    /// Entfernt die Kennungen; nicht vorhandene werden stillschweigend
    /// ignoriert. Die Reihenfolge der verbleibenden Einträge bleibt erhalten.
    pub fn remove<'a, I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for id in ids {
            self.visited.shift_remove(id);
        }
    }

    /// Reihenfolge-treuer Schnappschuss für die Persistenz.
    pub fn snapshot(&self) -> impl Iterator<Item = &str> {
        self.visited.iter().map(String::as_str)
    }

    /// Ersetzt den Zustand vollständig (Session-Start aus der Persistenz).
    pub fn restore<I>(&mut self, ids: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.visited = ids.into_iter().collect();
    }

    /// Prüft ob eine Kennung markiert ist.
    pub fn contains(&self, id: &str) -> bool {
        self.visited.contains(id)
    }

    /// Read-only Sicht auf die markierten Kennungen.
    pub fn ids(&self) -> &IndexSet<String> {
        &self.visited
    }

    /// Gibt die Anzahl der markierten Länder zurück.
    pub fn len(&self) -> usize {
        self.visited.len()
    }

    /// Gibt `true` zurück, wenn nichts markiert ist.
    pub fn is_empty(&self) -> bool {
        self.visited.is_empty()
    }
}
