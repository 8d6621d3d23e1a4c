#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
  recovery_coach_lib::run()
}
