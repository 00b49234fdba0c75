//! Seating assignments and seat swaps.

use rand::Rng;

use crate::registry::PersonId;

/// A seat position: table index and chair index within the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seat {
    pub table: usize,
    pub chair: usize,
}

impl Seat {
    pub fn new(table: usize, chair: usize) -> Self {
        Self { table, chair }
    }
}

/// Exchange of the occupants of two seats. Applying it twice is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeatSwap {
    pub first: Seat,
    pub second: Seat,
}

impl SeatSwap {
    pub fn new(first: Seat, second: Seat) -> Self {
        Self { first, second }
    }
}

/// Tables of equal capacity, each an ordered list of occupants.
///
/// Empty [`PersonId`]s are unfilled seats. Every real person appears once.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seating {
    tables: Vec<Vec<PersonId>>,
}

impl Seating {
    /// Wraps prepared tables. All tables are expected to share one capacity.
    pub fn new(tables: Vec<Vec<PersonId>>) -> Self {
        debug_assert!(
            tables.windows(2).all(|w| w[0].len() == w[1].len()),
            "tables must share one capacity"
        );
        Self { tables }
    }

    /// A seating with no tables.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a seating from plain names, folding case.
    pub fn from_names<I, T, S>(tables: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(
            tables
                .into_iter()
                .map(|table| table.into_iter().map(PersonId::new).collect())
                .collect(),
        )
    }

    pub fn tables(&self) -> &[Vec<PersonId>] {
        &self.tables
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }

    /// Capacity of each table, 0 for an empty seating.
    pub fn chairs_per_table(&self) -> usize {
        self.tables.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Occupant of `seat`, if the seat exists.
    pub fn occupant(&self, seat: Seat) -> Option<&PersonId> {
        self.tables.get(seat.table)?.get(seat.chair)
    }

    /// Every seated person, padding skipped.
    pub fn people(&self) -> impl Iterator<Item = &PersonId> + '_ {
        self.tables.iter().flatten().filter(|p| !p.is_empty())
    }

    /// Swaps the occupants of the two seats in place.
    pub fn apply(&mut self, swap: SeatSwap) {
        let SeatSwap { first, second } = swap;
        if first.table == second.table {
            self.tables[first.table].swap(first.chair, second.chair);
            return;
        }
        let (low, high) = if first.table < second.table {
            (first, second)
        } else {
            (second, first)
        };
        let (head, tail) = self.tables.split_at_mut(high.table);
        std::mem::swap(&mut head[low.table][low.chair], &mut tail[0][high.chair]);
    }

    /// Applies `swap` tentatively. The returned trial rolls the swap back
    /// when dropped unless [`SwapTrial::commit`] is called.
    pub fn trial(&mut self, swap: SeatSwap) -> SwapTrial<'_> {
        self.apply(swap);
        SwapTrial {
            seating: self,
            swap,
            committed: false,
        }
    }

    /// A random swap between two distinct tables, or `None` with fewer
    /// than two tables.
    pub fn random_swap<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<SeatSwap> {
        let tables = self.table_count();
        let chairs = self.chairs_per_table();
        if tables < 2 || chairs == 0 {
            return None;
        }
        let first = rng.random_range(0..tables);
        let mut second = rng.random_range(0..tables - 1);
        if second >= first {
            second += 1;
        }
        Some(SeatSwap::new(
            Seat::new(first, rng.random_range(0..chairs)),
            Seat::new(second, rng.random_range(0..chairs)),
        ))
    }

    /// Every swap between seats at two distinct tables, skipping swaps of
    /// two empty seats.
    pub fn cross_table_swaps(&self) -> impl Iterator<Item = SeatSwap> + '_ {
        let tables = self.table_count();
        let chairs = self.chairs_per_table();
        (0..tables)
            .flat_map(move |t1| (t1 + 1..tables).map(move |t2| (t1, t2)))
            .flat_map(move |(t1, t2)| {
                (0..chairs).flat_map(move |c1| {
                    (0..chairs).map(move |c2| SeatSwap::new(Seat::new(t1, c1), Seat::new(t2, c2)))
                })
            })
            .filter(move |swap| {
                !(self.tables[swap.first.table][swap.first.chair].is_empty()
                    && self.tables[swap.second.table][swap.second.chair].is_empty())
            })
    }

    /// Same membership with people sorted within tables and tables sorted,
    /// for comparing seatings regardless of order.
    pub fn sorted(&self) -> Seating {
        let mut tables = self.tables.clone();
        for table in &mut tables {
            table.sort();
        }
        tables.sort();
        Seating { tables }
    }

    pub fn into_tables(self) -> Vec<Vec<PersonId>> {
        self.tables
    }

    /// Plain names, with `""` for unfilled seats.
    pub fn into_names(self) -> Vec<Vec<String>> {
        self.tables
            .into_iter()
            .map(|table| table.into_iter().map(String::from).collect())
            .collect()
    }
}

/// A swap applied to a [`Seating`] pending commit or rollback.
#[must_use = "a dropped trial rolls its swap back"]
pub struct SwapTrial<'a> {
    seating: &'a mut Seating,
    swap: SeatSwap,
    committed: bool,
}

impl SwapTrial<'_> {
    /// The seating with the swap applied.
    pub fn seating(&self) -> &Seating {
        &*self.seating
    }

    /// Keeps the swap.
    pub fn commit(mut self) {
        self.committed = true;
    }

    /// Reverts the swap.
    pub fn rollback(self) {}
}

impl Drop for SwapTrial<'_> {
    fn drop(&mut self) {
        if !self.committed {
            self.seating.apply(self.swap);
        }
    }
}
