//! Pointer input - pixels to cells, buttons to edit intents
//!
//! Pure logic only; the DOM listeners in `api::dom` feed raw event data in
//! and forward the resulting edits to the controller.

/// `MouseEvent.buttons` mask for the primary button alone.
pub const BUTTONS_PRIMARY: u16 = 1;
/// `MouseEvent.buttons` mask for the secondary button alone.
pub const BUTTONS_SECONDARY: u16 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditIntent {
    SetAlive,
    SetDead,
}

impl EditIntent {
    /// Primary paints, secondary erases. Chords and other buttons do nothing.
    pub fn from_buttons(buttons: u16) -> Option<Self> {
        match buttons {
            BUTTONS_PRIMARY => Some(EditIntent::SetAlive),
            BUTTONS_SECONDARY => Some(EditIntent::SetDead),
            _ => None,
        }
    }

    #[inline]
    pub fn alive(self) -> bool {
        self == EditIntent::SetAlive
    }
}

/// A resolved edit, ready for `Simulation::edit_cell`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellEdit {
    pub row: i32,
    pub col: i32,
    pub alive: bool,
}

/// Map canvas-relative pixel coordinates to a (row, col) pair.
///
/// Floor division, so pixels left of or above the canvas give negative
/// indices. Bounds are left to the grid. NaN or infinite pixels land on
/// (-1, -1), which no board contains.
pub fn pixel_to_cell(x: f64, y: f64, cell_size: u32) -> (i32, i32) {
    if cell_size == 0 || !x.is_finite() || !y.is_finite() {
        return (-1, -1);
    }
    let size = cell_size as f64;
    let row = (y / size).floor();
    let col = (x / size).floor();
    (row as i32, col as i32)
}

/// Press / drag / release tracking for painting on the canvas.
#[derive(Clone, Debug)]
pub struct PointerPainter {
    cell_size: u32,
    drawing: bool,
}

impl PointerPainter {
    pub fn new(cell_size: u32) -> Self {
        Self { cell_size, drawing: false }
    }

    #[inline]
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Button went down: start drawing and edit under the pointer.
    pub fn press(&mut self, x: f64, y: f64, buttons: u16) -> Option<CellEdit> {
        self.drawing = true;
        self.edit_at(x, y, buttons)
    }

    /// Pointer moved: edits only while a button is held.
    pub fn drag(&mut self, x: f64, y: f64, buttons: u16) -> Option<CellEdit> {
        if !self.drawing {
            return None;
        }
        self.edit_at(x, y, buttons)
    }

    /// Button released or pointer left the canvas.
    pub fn release(&mut self) {
        self.drawing = false;
    }

    fn edit_at(&self, x: f64, y: f64, buttons: u16) -> Option<CellEdit> {
        let intent = EditIntent::from_buttons(buttons)?;
        let (row, col) = pixel_to_cell(x, y, self.cell_size);
        Some(CellEdit { row, col, alive: intent.alive() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixels_floor_divide_by_cell_size() {
        assert_eq!(pixel_to_cell(0.0, 0.0, 15), (0, 0));
        assert_eq!(pixel_to_cell(14.9, 14.9, 15), (0, 0));
        assert_eq!(pixel_to_cell(15.0, 30.0, 15), (2, 1));
        assert_eq!(pixel_to_cell(1199.0, 659.0, 15), (43, 79));
    }

    #[test]
    fn negative_pixels_give_negative_cells() {
        assert_eq!(pixel_to_cell(-0.5, 3.0, 15), (0, -1));
        assert_eq!(pixel_to_cell(3.0, -20.0, 15), (-2, 0));
    }

    #[test]
    fn non_finite_pixels_map_off_the_board() {
        assert_eq!(pixel_to_cell(f64::NAN, 20.0, 15), (-1, -1));
        assert_eq!(pixel_to_cell(20.0, f64::NAN, 15), (-1, -1));
        assert_eq!(pixel_to_cell(f64::INFINITY, 0.0, 15), (-1, -1));
        assert_eq!(pixel_to_cell(0.0, f64::NEG_INFINITY, 15), (-1, -1));

        let mut painter = PointerPainter::new(15);
        let edit = painter.press(f64::NAN, f64::NAN, BUTTONS_PRIMARY).unwrap();
        assert_eq!((edit.row, edit.col), (-1, -1));
    }

    #[test]
    fn buttons_map_to_intents() {
        assert_eq!(EditIntent::from_buttons(1), Some(EditIntent::SetAlive));
        assert_eq!(EditIntent::from_buttons(2), Some(EditIntent::SetDead));
        assert_eq!(EditIntent::from_buttons(0), None);
        assert_eq!(EditIntent::from_buttons(3), None);
        assert_eq!(EditIntent::from_buttons(4), None);
    }

    #[test]
    fn drag_only_edits_while_pressed() {
        let mut painter = PointerPainter::new(10);
        assert_eq!(painter.drag(25.0, 5.0, 1), None);

        let edit = painter.press(25.0, 5.0, 1);
        assert_eq!(edit, Some(CellEdit { row: 0, col: 2, alive: true }));
        assert!(painter.is_drawing());

        let edit = painter.drag(35.0, 15.0, 2);
        assert_eq!(edit, Some(CellEdit { row: 1, col: 3, alive: false }));

        painter.release();
        assert!(!painter.is_drawing());
        assert_eq!(painter.drag(45.0, 15.0, 1), None);
    }

    #[test]
    fn press_without_known_button_starts_drawing_but_does_not_edit() {
        let mut painter = PointerPainter::new(10);
        assert_eq!(painter.press(5.0, 5.0, 4), None);
        assert!(painter.is_drawing());
    }
}
