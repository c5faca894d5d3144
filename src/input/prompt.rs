use crate::config::{CalculatorLimits, Interval, SimulationParameters};
use std::io::{self, BufRead, Write};

//line-oriented prompts over any reader/writer pair
//every prompt re-asks until the answer is acceptable
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Prompter { reader, writer }
    }

    //writes a line of output
    pub fn say(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{}", message)
    }

    //writes the prompt and reads one trimmed answer
    //end of input is an UnexpectedEof error
    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.writer, "{}", prompt)?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input ended before an answer was given",
            ));
        }
        Ok(line.trim().to_string())
    }

    //asks for a finite number not below minimum
    pub fn prompt_float(&mut self, prompt: &str, minimum: f64) -> io::Result<f64> {
        loop {
            let answer = self.ask(prompt)?;
            match answer.parse::<f64>() {
                Ok(value) if value.is_finite() => {
                    if value < minimum {
                        self.say(&format!(
                            "Error: Please enter a number not less than {:?}.",
                            minimum
                        ))?;
                    } else {
                        return Ok(value);
                    }
                }
                _ => self.say("Error: Please enter a valid number.")?,
            }
        }
    }

    //asks for an integer in [minimum, maximum]
    pub fn prompt_int(
        &mut self,
        prompt: &str,
        minimum: i64,
        maximum: Option<i64>,
    ) -> io::Result<i64> {
        loop {
            let answer = self.ask(prompt)?;
            match answer.parse::<i64>() {
                Ok(value) if value < minimum => {
                    self.say(&format!(
                        "Error: Please enter a number not less than {}.",
                        minimum
                    ))?;
                }
                Ok(value) => match maximum {
                    Some(max) if value > max => {
                        self.say(&format!(
                            "Error: Please enter a number not greater than {}.",
                            max
                        ))?;
                    }
                    _ => return Ok(value),
                },
                Err(_) => self.say("Error: Please enter a valid integer.")?,
            }
        }
    }

    //numbered menu of the deposit intervals
    pub fn prompt_interval(&mut self) -> io::Result<Interval> {
        let count = Interval::ALL.len();
        loop {
            self.say("\nSelect the regular deposit interval:")?;
            for (i, interval) in Interval::ALL.iter().enumerate() {
                self.say(&format!("{}. {}", i + 1, interval.name()))?;
            }

            let answer = self.ask(&format!("Enter your choice (1-{}): ", count))?;
            match answer.parse::<usize>() {
                Ok(choice) => match Interval::from_choice(choice) {
                    Some(interval) => return Ok(interval),
                    None => self.say(&format!(
                        "Error: Please enter a number between 1 and {}.",
                        count
                    ))?,
                },
                Err(_) => self.say("Error: Please enter a valid number.")?,
            }
        }
    }

    //asks a y/n question
    pub fn prompt_yes_no(&mut self, prompt: &str) -> io::Result<bool> {
        loop {
            let answer = self.ask(&format!("{} (y/n): ", prompt))?.to_lowercase();
            match answer.as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => self.say("Error: Please enter 'y' for Yes or 'n' for No.")?,
            }
        }
    }

    //gathers one parameter set
    //the rate upper bound is left to SimulationParameters::validate
    pub fn collect_parameters(
        &mut self,
        limits: &CalculatorLimits,
    ) -> io::Result<SimulationParameters> {
        self.say("\nPlease enter your investment details:")?;
        let initial_amount = self.prompt_float("Enter the initial amount: ", limits.min_amount)?;
        let annual_rate_percent =
            self.prompt_float("Enter the yearly interest percentage: ", limits.min_interest_rate)?;
        let interval = self.prompt_interval()?;
        let deposit_per_period =
            self.prompt_float("Enter the regular deposit amount: ", limits.min_amount)?;
        let years = self.prompt_int(
            "Enter the number of years: ",
            1,
            Some(i64::from(limits.max_years)),
        )?;

        Ok(SimulationParameters::new(
            initial_amount,
            annual_rate_percent,
            years as u32,
            interval,
            deposit_per_period,
        ))
    }

    //gives back the writer, mainly for inspecting output
    pub fn into_writer(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(p: Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(p.into_writer()).unwrap()
    }

    #[test]
    fn float_prompt_retries_until_valid() {
        let mut p = prompter("abc\n-5\n 12.5 \n");
        assert_eq!(p.prompt_float("Amount: ", 0.0).unwrap(), 12.5);

        let out = output(p);
        assert!(out.contains("Error: Please enter a valid number."));
        assert!(out.contains("Error: Please enter a number not less than 0.0."));
    }

    #[test]
    fn float_prompt_rejects_non_finite() {
        let mut p = prompter("nan\ninf\n3\n");
        assert_eq!(p.prompt_float("Amount: ", 0.0).unwrap(), 3.0);
    }

    #[test]
    fn int_prompt_enforces_bounds() {
        let mut p = prompter("0\n101\n2.5\n30\n");
        assert_eq!(p.prompt_int("Years: ", 1, Some(100)).unwrap(), 30);

        let out = output(p);
        assert!(out.contains("Error: Please enter a number not less than 1."));
        assert!(out.contains("Error: Please enter a number not greater than 100."));
        assert!(out.contains("Error: Please enter a valid integer."));
    }

    #[test]
    fn interval_menu_maps_choices() {
        let mut p = prompter("7\nx\n3\n");
        assert_eq!(p.prompt_interval().unwrap(), Interval::Monthly);

        let out = output(p);
        assert!(out.contains("1. Daily"));
        assert!(out.contains("4. Yearly"));
        assert!(out.contains("Error: Please enter a number between 1 and 4."));
    }

    #[test]
    fn yes_no_is_case_insensitive() {
        let mut p = prompter("maybe\nY\nn\n");
        assert!(p.prompt_yes_no("Save?").unwrap());
        assert!(!p.prompt_yes_no("Again?").unwrap());
        assert!(output(p).contains("Save? (y/n): "));
    }

    #[test]
    fn end_of_input_is_an_error() {
        let mut p = prompter("");
        let err = p.prompt_yes_no("Save?").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn collects_parameters_in_order() {
        let mut p = prompter("1000\n5\n3\n100\n30\n");
        let params = p.collect_parameters(&CalculatorLimits::default()).unwrap();
        assert_eq!(
            params,
            SimulationParameters::new(1000.0, 5.0, 30, Interval::Monthly, 100.0)
        );
    }
}
