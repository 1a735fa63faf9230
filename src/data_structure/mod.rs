pub mod array_list;
