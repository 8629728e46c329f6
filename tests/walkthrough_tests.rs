//! Full walkthroughs of the adventure map.
//!
//! These tests play complete sessions through the public API:
//! - Losing by entering the cave
//! - Winning through every puzzle area
//! - Rejected moves at each step of the way

use adventure_state::{Area, Game, GameStatus, MoveError, Puzzle};
use pretty_assertions::assert_eq;

fn assert_invalid(game: &mut Game, target: Area) {
    let before = game.clone();
    let result = game.move_to_area(target);
    assert_eq!(
        result,
        Err(MoveError::InvalidArea {
            from: before.current_area(),
            to: target,
        })
    );
    assert_eq!(*game, before);
}

fn assert_game_over(game: &mut Game) {
    let before = game.clone();
    for target in Area::ALL {
        let err = game.move_to_area(target).unwrap_err();
        assert_eq!(
            err,
            MoveError::GameOver {
                status: before.status()
            }
        );
    }
    assert_eq!(*game, before);
}

// =============================================================================
// Losing
// =============================================================================

#[test]
fn test_lose_in_cave() {
    let mut game = Game::new();
    assert_eq!(game.current_area(), Area::Forrest);
    assert_eq!(game.status(), GameStatus::Playing);

    assert_invalid(&mut game, Area::Tower);
    assert_invalid(&mut game, Area::Library);
    assert_invalid(&mut game, Area::EndArea);

    game.move_to_area(Area::Cave).unwrap();
    assert_eq!(game.current_area().puzzle(), Puzzle::NoPuzzle);
    assert_eq!(game.status(), GameStatus::Lose);

    assert_game_over(&mut game);
    assert_eq!(game.current_area(), Area::Cave);
    assert_eq!(game.status(), GameStatus::Lose);
}

// =============================================================================
// Winning
// =============================================================================

#[test]
fn test_win_through_tower_and_library() {
    let mut game = Game::new();
    assert_invalid(&mut game, Area::Tower);
    assert_invalid(&mut game, Area::Library);
    assert_invalid(&mut game, Area::EndArea);
    assert_eq!(game.current_area().available_areas().len(), 2);

    game.move_to_area(Area::City).unwrap();
    assert_eq!(game.current_area(), Area::City);
    assert_eq!(game.current_area().puzzle(), Puzzle::NoPuzzle);
    assert_invalid(&mut game, Area::Cave);
    assert_invalid(&mut game, Area::EndArea);
    assert_eq!(game.current_area().available_areas().len(), 3);

    game.move_to_area(Area::Tower).unwrap();
    assert_eq!(game.current_area().puzzle(), Puzzle::Riddle);
    for target in [Area::Library, Area::EndArea, Area::Cave, Area::Forrest] {
        assert_invalid(&mut game, target);
    }
    assert_eq!(game.current_area().available_areas().len(), 1);

    game.move_to_area(Area::City).unwrap();
    assert_invalid(&mut game, Area::Cave);
    assert_invalid(&mut game, Area::EndArea);

    game.move_to_area(Area::Library).unwrap();
    assert_eq!(game.current_area().puzzle(), Puzzle::Math);
    for target in [Area::Cave, Area::Tower, Area::Forrest] {
        assert_invalid(&mut game, target);
    }
    assert_eq!(game.current_area().available_areas().len(), 2);
    assert_eq!(game.status(), GameStatus::Playing);

    game.move_to_area(Area::EndArea).unwrap();
    assert_eq!(game.current_area(), Area::EndArea);
    assert_eq!(game.current_area().puzzle(), Puzzle::NoPuzzle);
    assert!(game.current_area().available_areas().is_empty());
    assert_eq!(game.status(), GameStatus::Win);

    assert_game_over(&mut game);

    let visited: Vec<&str> = game.history().iter().map(Area::name).collect();
    assert_eq!(
        visited,
        vec!["Forrest", "City", "Tower", "City", "Library", "EndArea"]
    );
}

#[test]
fn test_walk_by_names() {
    let mut game = Game::new();

    for name in ["City", "Forrest", "City", "Library", "EndArea"] {
        let area: Area = name.parse().unwrap();
        game.move_to_area(area).unwrap();
        assert_eq!(game.current_area().name(), name);
    }

    assert_eq!(game.status(), GameStatus::Win);
}

#[test]
fn test_try_move_chain() {
    let game = Game::new()
        .try_move(Area::City)
        .and_then(|g| g.try_move(Area::Library))
        .and_then(|g| g.try_move(Area::EndArea))
        .unwrap();

    assert!(game.is_over());
    assert_eq!(game.status(), GameStatus::Win);
    assert!(game.ended_at().unwrap() >= game.created_at());
}

#[test]
fn test_caller_checks_answers() {
    let mut game = Game::new();
    game.move_to_area(Area::City).unwrap();
    game.move_to_area(Area::Library).unwrap();

    let puzzle = game.current_area().puzzle();
    let picked = puzzle.choices()[0];
    assert_ne!(picked, puzzle.answer());

    // A wrong answer does not stop the player
    game.move_to_area(Area::EndArea).unwrap();
    assert_eq!(game.status(), GameStatus::Win);
}
