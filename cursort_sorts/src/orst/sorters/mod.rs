pub mod bubble_sorter;
pub mod heap_sorter;
pub mod insertion_sorter;
pub mod quick_sorter;
pub mod selection_sorter;
pub mod shell_sorter;
