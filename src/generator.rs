//! Random generation of rectangular perfect mazes.

use crate::maze::{Direction, Maze};
use rand::prelude::*;

/// Union-find over flat cell indices, with path compression and union by
/// rank.
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    fn new(len: usize) -> Self {
        UnionFind {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    fn find(&mut self, i: usize) -> usize {
        if self.parent[i] != i {
            let root = self.find(self.parent[i]);
            self.parent[i] = root;
        }
        self.parent[i]
    }

    /// Returns true if the sets were merged, false if they already shared a
    /// root.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        if self.rank[root_a] < self.rank[root_b] {
            self.parent[root_a] = root_b;
        } else {
            if self.rank[root_a] == self.rank[root_b] {
                self.rank[root_a] += 1;
            }
            self.parent[root_b] = root_a;
        }
        true
    }
}

/// Generates a random `width` by `height` perfect maze with Kruskal's
/// algorithm.
///
/// Every tile starts fully walled. The interior walls are visited in an order
/// drawn from `rng`, and a wall is knocked out, on both of its sides, exactly
/// when it separates two regions that were not yet connected. The result
/// keeps the full perimeter, has agreeing wall flags across every opening,
/// and admits exactly one path between any two cells.
///
/// Zero in either dimension gives the empty maze.
///
/// # Examples
///
/// ```
/// use micromouse_maze::generator::generate_maze;
/// use rand::prelude::*;
///
/// let maze = generate_maze(8, 6, &mut StdRng::seed_from_u64(71));
/// assert_eq!(maze.width(), 8);
/// assert!(maze.has_consistent_walls());
/// ```
pub fn generate_maze(width: usize, height: usize, rng: &mut impl Rng) -> Maze {
    let mut maze = Maze::closed(width, height);
    if maze.is_empty() {
        return maze;
    }

    // every interior wall once: each cell's east and north boundary
    let mut edges = Vec::new();
    for x in 0..width {
        for y in 0..height {
            if x + 1 < width {
                edges.push((x, y, Direction::East));
            }
            if y + 1 < height {
                edges.push((x, y, Direction::North));
            }
        }
    }
    edges.shuffle(rng);

    let mut sets = UnionFind::new(width * height);
    for (x, y, direction) in edges {
        let (nx, ny) = match direction {
            Direction::East => (x + 1, y),
            _ => (x, y + 1),
        };
        if sets.union(x * height + y, nx * height + ny) {
            maze.tile_mut(x, y).unwrap().set_wall(direction, false);
            maze.tile_mut(nx, ny)
                .unwrap()
                .set_wall(direction.opposite(), false);
        }
    }

    maze
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::DIRECTIONS;
    use crate::maze_file::{is_maze_file, load_maze, save_maze};
    use tempfile::TempDir;

    /// Counts the cells reachable from (0, 0) through wall openings.
    fn reachable_cells(maze: &Maze) -> usize {
        let width = maze.width();
        let height = maze.column(0).map(|column| column.len()).unwrap_or(0);
        let mut visited = vec![vec![false; height]; width];
        let mut queue = vec![(0, 0)];
        let mut count = 0;
        while let Some((x, y)) = queue.pop() {
            if visited[x][y] {
                continue;
            }
            visited[x][y] = true;
            count += 1;
            for direction in DIRECTIONS {
                if !maze.at(x, y).unwrap().wall(direction) {
                    if let Some(next) = maze.neighbor(x, y, direction) {
                        queue.push(next);
                    }
                }
            }
        }
        count
    }

    fn open_interior_edges(maze: &Maze) -> usize {
        let mut open = 0;
        for x in 0..maze.width() {
            for y in 0..maze.column(x).unwrap().len() {
                for direction in [Direction::North, Direction::East] {
                    if maze.neighbor(x, y, direction).is_some()
                        && !maze.at(x, y).unwrap().wall(direction)
                    {
                        open += 1;
                    }
                }
            }
        }
        open
    }

    #[test]
    fn generated_mazes_have_the_requested_shape() {
        let mut rng = StdRng::seed_from_u64(1);
        for (width, height) in [(1, 1), (2, 5), (9, 3), (16, 16)] {
            let maze = generate_maze(width, height, &mut rng);
            assert_eq!(maze.width(), width);
            assert!(maze.is_rectangular());
            assert_eq!(maze.column(0).unwrap().len(), height);
        }
    }

    #[test]
    fn generated_mazes_keep_the_perimeter() {
        let maze = generate_maze(7, 5, &mut StdRng::seed_from_u64(2));
        for y in 0..5 {
            assert!(maze.at(0, y).unwrap().west);
            assert!(maze.at(6, y).unwrap().east);
        }
        for x in 0..7 {
            assert!(maze.at(x, 0).unwrap().south);
            assert!(maze.at(x, 4).unwrap().north);
        }
    }

    #[test]
    fn generated_mazes_are_perfect() {
        let mut rng = StdRng::seed_from_u64(3);
        for (width, height) in [(1, 1), (1, 8), (6, 6), (12, 7)] {
            let maze = generate_maze(width, height, &mut rng);
            assert!(maze.has_consistent_walls());
            // a spanning tree: everything connected, no opening to spare
            assert_eq!(reachable_cells(&maze), width * height);
            assert_eq!(open_interior_edges(&maze), width * height - 1);
        }
    }

    #[test]
    fn zero_dimensions_give_the_empty_maze() {
        let mut rng = StdRng::seed_from_u64(4);
        assert!(generate_maze(0, 3, &mut rng).is_empty());
        assert!(generate_maze(3, 0, &mut rng).is_empty());
    }

    #[test]
    fn seeded_generation_is_deterministic() {
        let first = generate_maze(8, 8, &mut StdRng::seed_from_u64(5));
        let second = generate_maze(8, 8, &mut StdRng::seed_from_u64(5));
        assert_eq!(first, second);
    }

    #[test]
    fn generated_mazes_save_to_conformant_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("generated.maz");

        let maze = generate_maze(5, 4, &mut StdRng::seed_from_u64(6));
        save_maze(&maze, &path).unwrap();
        assert!(is_maze_file(&path));
        assert_eq!(load_maze(&path).unwrap(), maze);
    }
}
