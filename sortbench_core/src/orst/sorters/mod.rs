pub mod bubble_sorter;
pub mod cocktail_sorter;
pub mod comb_sorter;
pub mod heap_sorter;
pub mod insertion_sorter;
pub mod library_sorter;
pub mod merge_sorter;
pub mod quick_sorter;
pub mod selection_sorter;
pub mod tim_sorter;
pub mod tournament_sorter;
