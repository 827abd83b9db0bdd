mod ast_printer_test;
mod token_test;
