/// Porter stemming algorithm (M.F. Porter, 1980), following the reference C implementation.
///
/// This is the original algorithm, without the NLTK extensions: "ties" stems to "ti" and
/// "dying" to "dy" where NLTK's default mode gives "tie" and "die".
///
/// Words are expected to be lowercase; words with non-ascii characters and words of
/// length <= 2 are returned unchanged.
pub fn stem(word: &str) -> String {
    if word.len() <= 2 || !word.bytes().all(|c| c.is_ascii_lowercase()) {
        return word.to_owned();
    }

    let mut stemmer = Stemmer { b: word.as_bytes().to_vec(), k: word.len() as isize - 1, j: 0 };
    stemmer.step1ab();
    if stemmer.k > 0 {
        stemmer.step1c();
        stemmer.step2();
        stemmer.step3();
        stemmer.step4();
        stemmer.step5();
    }

    stemmer.b.truncate((stemmer.k + 1) as usize);
    // only ascii bytes are ever written into the buffer
    String::from_utf8(stemmer.b).unwrap_or_else(|_| word.to_owned())
}

/// `b[0..=k]` is the word being stemmed, `j` marks the end of the stem when a suffix matched
struct Stemmer {
    b: Vec<u8>,
    k: isize,
    j: isize,
}

impl Stemmer {
    #[inline]
    fn at(&self, i: isize) -> u8 {
        self.b[i as usize]
    }

    fn cons(&self, i: isize) -> bool {
        match self.at(i) {
            b'a' | b'e' | b'i' | b'o' | b'u' => false,
            b'y' => if i == 0 { true } else { !self.cons(i - 1) },
            _ => true
        }
    }

    /// Number of consonant-vowel sequences between 0 and j, i.e: m in [C](VC){m}[V]
    fn m(&self) -> usize {
        let mut n = 0;
        let mut i = 0;
        loop {
            if i > self.j { return n; }
            if !self.cons(i) { break; }
            i += 1;
        }
        i += 1;
        loop {
            loop {
                if i > self.j { return n; }
                if self.cons(i) { break; }
                i += 1;
            }
            i += 1;
            n += 1;
            loop {
                if i > self.j { return n; }
                if !self.cons(i) { break; }
                i += 1;
            }
            i += 1;
        }
    }

    fn vowel_in_stem(&self) -> bool {
        (0..self.j + 1).any(|i| !self.cons(i))
    }

    fn double_cons(&self, j: isize) -> bool {
        j >= 1 && self.at(j) == self.at(j - 1) && self.cons(j)
    }

    /// i-2, i-1, i has the form consonant - vowel - consonant and the last one isn't w, x or y
    fn cvc(&self, i: isize) -> bool {
        if i < 2 || !self.cons(i) || self.cons(i - 1) || !self.cons(i - 2) {
            return false;
        }
        match self.at(i) {
            b'w' | b'x' | b'y' => false,
            _ => true
        }
    }

    fn ends(&mut self, s: &str) -> bool {
        let s = s.as_bytes();
        let length = s.len() as isize;
        if length > self.k + 1 {
            return false;
        }
        if &self.b[(self.k - length + 1) as usize..(self.k + 1) as usize] != s {
            return false;
        }
        self.j = self.k - length;
        true
    }

    fn set_to(&mut self, s: &str) {
        let start = (self.j + 1) as usize;
        self.b.truncate(start);
        self.b.extend_from_slice(s.as_bytes());
        self.k = self.j + s.len() as isize;
    }

    fn replace(&mut self, s: &str) {
        if self.m() > 0 {
            self.set_to(s);
        }
    }

    /// Try the suffix rules in order; the first matching suffix is replaced (if m > 0) and ends the step
    fn replace_first(&mut self, rules: &[(&str, &str)]) {
        for &(suffix, replacement) in rules {
            if self.ends(suffix) {
                self.replace(replacement);
                return;
            }
        }
    }

    /// Plurals and -ed or -ing
    fn step1ab(&mut self) {
        if self.at(self.k) == b's' {
            if self.ends("sses") {
                self.k -= 2;
            } else if self.ends("ies") {
                self.set_to("i");
            } else if self.at(self.k - 1) != b's' {
                self.k -= 1;
            }
        }

        if self.ends("eed") {
            if self.m() > 0 {
                self.k -= 1;
            }
        } else if (self.ends("ed") || self.ends("ing")) && self.vowel_in_stem() {
            self.k = self.j;
            if self.ends("at") {
                self.set_to("ate");
            } else if self.ends("bl") {
                self.set_to("ble");
            } else if self.ends("iz") {
                self.set_to("ize");
            } else if self.double_cons(self.k) {
                self.k -= 1;
                match self.at(self.k) {
                    b'l' | b's' | b'z' => self.k += 1,
                    _ => {}
                }
            } else {
                self.j = self.k;
                if self.m() == 1 && self.cvc(self.k) {
                    self.set_to("e");
                }
            }
        }
    }

    /// Terminal y to i when there is another vowel in the stem
    fn step1c(&mut self) {
        if self.ends("y") && self.vowel_in_stem() {
            let k = self.k as usize;
            self.b[k] = b'i';
        }
    }

    /// Double suffixes to single ones, e.g: -ization to -ize
    fn step2(&mut self) {
        match self.at(self.k - 1) {
            b'a' => self.replace_first(&[("ational", "ate"), ("tional", "tion")]),
            b'c' => self.replace_first(&[("enci", "ence"), ("anci", "ance")]),
            b'e' => self.replace_first(&[("izer", "ize")]),
            b'l' => self.replace_first(&[("bli", "ble"), ("alli", "al"), ("entli", "ent"), ("eli", "e"), ("ousli", "ous")]),
            b'o' => self.replace_first(&[("ization", "ize"), ("ation", "ate"), ("ator", "ate")]),
            b's' => self.replace_first(&[("alism", "al"), ("iveness", "ive"), ("fulness", "ful"), ("ousness", "ous")]),
            b't' => self.replace_first(&[("aliti", "al"), ("iviti", "ive"), ("biliti", "ble")]),
            b'g' => self.replace_first(&[("logi", "log")]),
            _ => {}
        }
    }

    /// -ic-, -full, -ness etc.
    fn step3(&mut self) {
        match self.at(self.k) {
            b'e' => self.replace_first(&[("icate", "ic"), ("ative", ""), ("alize", "al")]),
            b'i' => self.replace_first(&[("iciti", "ic")]),
            b'l' => self.replace_first(&[("ical", "ic"), ("ful", "")]),
            b's' => self.replace_first(&[("ness", "")]),
            _ => {}
        }
    }

    /// Remove -ant, -ence etc. in context <c>vcvc<v>
    fn step4(&mut self) {
        let matched = match self.at(self.k - 1) {
            b'a' => self.ends("al"),
            b'c' => self.ends("ance") || self.ends("ence"),
            b'e' => self.ends("er"),
            b'i' => self.ends("ic"),
            b'l' => self.ends("able") || self.ends("ible"),
            b'n' => self.ends("ant") || self.ends("ement") || self.ends("ment") || self.ends("ent"),
            b'o' => {
                (self.ends("ion") && self.j >= 0 && (self.at(self.j) == b's' || self.at(self.j) == b't'))
                    || self.ends("ou")
            },
            b's' => self.ends("ism"),
            b't' => self.ends("ate") || self.ends("iti"),
            b'u' => self.ends("ous"),
            b'v' => self.ends("ive"),
            b'z' => self.ends("ize"),
            _ => false
        };

        if matched && self.m() > 1 {
            self.k = self.j;
        }
    }

    /// Remove a final -e if m > 1 and change -ll to -l if m > 1
    fn step5(&mut self) {
        self.j = self.k;
        if self.at(self.k) == b'e' {
            let a = self.m();
            if a > 1 || (a == 1 && !self.cvc(self.k - 1)) {
                self.k -= 1;
            }
        }
        if self.at(self.k) == b'l' && self.double_cons(self.k) && self.m() > 1 {
            self.k -= 1;
        }
    }
}
