//! Tests for marching-squares tile IDs, corner order and atlas mapping

#[cfg(test)]
mod tests {
    use marching_caves::io::error::{GenerationError, IndexSpace};
    use marching_caves::spatial::grid::{CornerGrid, CornerState};
    use marching_caves::spatial::tiles::{
        Cell, TileId, cell_pixel_size, cell_tile_id, tile_id_from_corners, tile_map,
    };

    const E: CornerState = CornerState::Empty;
    const S: CornerState = CornerState::Solid;

    fn centre_solid_grid() -> CornerGrid {
        let mut grid = CornerGrid::with_size(2, 2).expect("Grid should allocate");
        grid.set(1, 1, S).expect("Corner should be in bounds");
        grid
    }

    // Tests the uniform configurations map to 0 and 15
    // Verified by inverting the solid test
    #[test]
    fn test_uniform_cells() {
        let mut grid = CornerGrid::with_size(1, 1).expect("Grid should allocate");
        assert_eq!(cell_tile_id(&grid, 0, 0).expect("Cell should be in bounds"), TileId::EMPTY);

        grid.fill(S);
        assert_eq!(cell_tile_id(&grid, 0, 0).expect("Cell should be in bounds"), TileId::SOLID);
        assert_eq!(TileId::SOLID.value(), 15);
    }

    // Tests each corner contributes its own bit, clockwise from top-left
    // Verified by swapping the bottom-right and bottom-left bits
    #[test]
    fn test_single_corner_bits() {
        assert_eq!(tile_id_from_corners([S, E, E, E]).value(), 1);
        assert_eq!(tile_id_from_corners([E, S, E, E]).value(), 2);
        assert_eq!(tile_id_from_corners([E, E, S, E]).value(), 4);
        assert_eq!(tile_id_from_corners([E, E, E, S]).value(), 8);
        assert_eq!(tile_id_from_corners([S, E, S, E]).value(), 5);
    }

    // Tests a cell reads its corners in clockwise order from top-left
    // Verified by reading corners in row-major order
    #[test]
    fn test_bottom_right_corner_only() {
        let mut grid = CornerGrid::with_size(1, 1).expect("Grid should allocate");
        grid.set(1, 1, S).expect("Corner should be in bounds");

        let tile = cell_tile_id(&grid, 0, 0).expect("Cell should be in bounds");
        assert_eq!(u8::from(tile), 4);
        assert_eq!(
            Cell::new(0, 0).corner_positions(),
            [[0, 0], [0, 1], [1, 1], [1, 0]]
        );
    }

    // Tests the shared centre corner lands in a different bit for each cell
    // Verified by using top-left bit for every corner
    #[test]
    fn test_centre_solid_scenario() {
        let grid = centre_solid_grid();

        let tile = |row, col| {
            cell_tile_id(&grid, row, col)
                .expect("Cell should be in bounds")
                .value()
        };

        assert_eq!(tile(0, 0), 4);
        assert_eq!(tile(0, 1), 8);
        assert_eq!(tile(1, 0), 2);
        assert_eq!(tile(1, 1), 1);
    }

    // Tests the atlas row is the low two bits and the column the high two
    // Verified by swapping row and column
    #[test]
    fn test_atlas_position() {
        assert_eq!(tile_id_from_corners([E, E, S, E]).atlas_position(), (0, 1));
        assert_eq!(tile_id_from_corners([S, S, E, S]).atlas_position(), (3, 2));
        assert_eq!(TileId::SOLID.atlas_position(), (3, 3));
        assert_eq!(TileId::EMPTY.atlas_position(), (0, 0));
    }

    // Tests classification markers do not count as solid
    // Verified by counting any non-Empty state as solid
    #[test]
    fn test_classified_corners_are_open() {
        let corners = [
            CornerState::Flooded,
            CornerState::Perimeter,
            CornerState::Spawn,
            S,
        ];
        assert_eq!(tile_id_from_corners(corners).value(), 8);
    }

    // Tests a grid without cells fails fast
    // Verified by returning tile 0 for degenerate grids
    #[test]
    fn test_degenerate_grid() {
        let grid = CornerGrid::with_size(0, 3).expect("Grid should allocate");

        assert!(matches!(
            cell_tile_id(&grid, 0, 0),
            Err(GenerationError::DegenerateGrid { rows: 0, cols: 3, .. })
        ));
        assert!(tile_map(&grid).is_err());
        assert!(cell_pixel_size(&grid, 640, 480).is_err());
    }

    // Tests cells past the grid report OutOfBounds in cell space
    // Verified by checking cells against corner bounds
    #[test]
    fn test_cell_out_of_bounds() {
        let grid = CornerGrid::with_size(2, 3).expect("Grid should allocate");

        match cell_tile_id(&grid, 2, 0) {
            Err(GenerationError::OutOfBounds {
                space,
                max_row,
                max_col,
                ..
            }) => {
                assert_eq!(space, IndexSpace::Cell);
                assert_eq!((max_row, max_col), (1, 2));
            }
            other => unreachable!("Expected OutOfBounds, got {other:?}"),
        }
    }

    // Tests the tile map matches per-cell lookups
    // Verified by transposing the tile map shape
    #[test]
    fn test_tile_map_matches_cells() {
        let mut grid = CornerGrid::with_size(2, 3).expect("Grid should allocate");
        for [row, col] in [[0, 0], [1, 2], [2, 3], [2, 1]] {
            grid.set(row, col, S).expect("Corner should be in bounds");
        }

        let map = tile_map(&grid).expect("Tile map should build for a 2x3 grid");

        assert_eq!(map.dim(), (2, 3));
        for ((row, col), tile) in map.indexed_iter() {
            assert_eq!(cell_tile_id(&grid, row, col).expect("Cell should be in bounds"), *tile);
        }
    }

    // Tests viewport division by cell count
    // Verified by dividing by corner count
    #[test]
    fn test_cell_pixel_size() {
        let grid = CornerGrid::with_size(4, 8).expect("Grid should allocate");
        assert_eq!(cell_pixel_size(&grid, 640, 480).expect("Grid should have cells"), (80, 120));
    }

    // Tests hexadecimal display of tile IDs
    // Verified by printing in decimal
    #[test]
    fn test_tile_id_display() {
        assert_eq!(TileId::SOLID.to_string(), "F");
        assert_eq!(tile_id_from_corners([E, S, E, S]).to_string(), "A");
    }
}
